use anyhow::Context;
use hostguard_domain::report::BaselineReport;
use hostguard_render::{
    RenderableData, RenderableDomain, RenderableEntry, RenderableOutcome, RenderableReport,
    RenderableVerdict,
};
use hostguard_types::{
    ids, Finding, HostguardData, HostguardReport, Outcome, ToolMeta, Verdict, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

pub fn serialize_report(report: &HostguardReport) -> anyhow::Result<Vec<u8>> {
    serde_json::to_vec_pretty(report).context("serialize report")
}

/// Project the typed evaluation result into the shape the renderers consume.
pub fn to_renderable(baseline: &BaselineReport) -> RenderableReport {
    RenderableReport {
        verdict: match baseline.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        domains: baseline
            .domains()
            .into_iter()
            .map(|domain| RenderableDomain {
                id: domain.domain.to_string(),
                entries: domain
                    .entries
                    .into_iter()
                    .map(|entry| RenderableEntry {
                        code: entry.code,
                        outcome: match entry.outcome {
                            Outcome::Pass => RenderableOutcome::Pass,
                            Outcome::Fail => RenderableOutcome::Fail,
                            Outcome::NotImplemented => RenderableOutcome::NotImplemented,
                        },
                        offending: entry.offending,
                    })
                    .collect(),
            })
            .collect(),
        data: RenderableData {
            checks_evaluated: baseline.counts.evaluated,
            checks_failed: baseline.counts.failed,
            checks_not_implemented: baseline.counts.not_implemented,
        },
    }
}

/// Envelope for a run that died on a configuration error: no check results
/// exist, so the report carries a single tool-level finding and a failing
/// verdict. Written so CI artifacts exist even for broken configurations.
pub fn runtime_error_report(message: &str) -> HostguardReport {
    let now = OffsetDateTime::now_utc();
    HostguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "hostguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at: now,
        finished_at: now,
        verdict: Verdict::Fail,
        findings: vec![Finding {
            check_id: ids::CHECK_TOOL_RUNTIME.to_string(),
            code: ids::CODE_RUNTIME_ERROR.to_string(),
            message: message.to_string(),
            data: serde_json::Value::Null,
        }],
        data: HostguardData::default(),
    }
}
