use crate::model::PatchFacts;
use crate::policy::PatchPolicy;
use crate::report::PatchReport;
use hostguard_types::Outcome;

/// Boundary inclusive: exactly `max_pending_updates` pending still passes.
pub fn run(facts: &PatchFacts, policy: &PatchPolicy) -> PatchReport {
    PatchReport {
        pending_updates: Outcome::from_bool(facts.pending_updates <= policy.max_pending_updates),
    }
}
