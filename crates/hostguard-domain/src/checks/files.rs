use crate::model::FileFacts;
use crate::policy::FilePolicy;
use crate::report::{FileCheck, FileReport};
use hostguard_types::Outcome;

/// Permission default when the facts carry no entry for a critical path:
/// "no permissions / file absent". Fails against any non-"0" requirement.
const ABSENT_PERMISSION: &str = "0";

/// Exact string equality; permission strings are pre-normalized by the
/// caller and no numeric parsing happens here.
pub fn run(facts: &FileFacts, policy: &FilePolicy) -> FileReport {
    let files = policy
        .critical_files
        .iter()
        .map(|(path, required)| {
            let observed = facts
                .file_permissions
                .get(path)
                .map(String::as_str)
                .unwrap_or(ABSENT_PERMISSION);
            FileCheck {
                path: path.clone(),
                required: required.clone(),
                observed: observed.to_string(),
                outcome: Outcome::from_bool(observed == required),
            }
        })
        .collect();

    FileReport { files }
}
