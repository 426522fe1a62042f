//! The `check` use case: evaluate a host against policy and produce a report.

use anyhow::Context;
use hostguard_domain::report::BaselineReport;
use hostguard_types::{HostguardData, HostguardReport, ToolMeta, Verdict, SCHEMA_REPORT_V1};
use time::OffsetDateTime;

/// Input for the check use case. Both documents arrive as text; the CLI owns
/// reading them from disk.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    pub policy_text: &'a str,
    pub facts_text: &'a str,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    /// The versioned report envelope.
    pub report: HostguardReport,
    /// The typed evaluation result, for renderers.
    pub baseline: BaselineReport,
}

/// Run the check use case: load policy (fail-closed), load facts
/// (fail-closed), evaluate, envelope. Configuration errors surface here,
/// before any check result exists; check failures are values inside the
/// returned report.
pub fn run_check(input: CheckInput<'_>) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();

    let policy = hostguard_policy::load_policy(input.policy_text).context("load policy")?;
    let facts = hostguard_facts::load_facts(input.facts_text).context("load facts")?;

    let baseline = hostguard_domain::evaluate(&facts, &policy);
    let findings = hostguard_domain::findings(&baseline);

    let finished_at = OffsetDateTime::now_utc();

    let report = HostguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "hostguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: baseline.verdict,
        findings,
        data: HostguardData {
            domains_evaluated: baseline.domains().len() as u32,
            checks_evaluated: baseline.counts.evaluated,
            checks_failed: baseline.counts.failed,
            checks_not_implemented: baseline.counts.not_implemented,
        },
    };

    Ok(CheckOutput { report, baseline })
}

/// Map verdict to exit code: 0 = pass, 2 = compliance failure. (1 is
/// reserved for configuration/runtime errors and assigned by the CLI.)
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
