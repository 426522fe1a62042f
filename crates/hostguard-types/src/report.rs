use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use time::OffsetDateTime;

/// Stable schema identifier for hostguard reports.
pub const SCHEMA_REPORT_V1: &str = "hostguard.report.v1";

/// Aggregate compliance verdict. Binary on purpose: a baseline either holds
/// or it does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Per-sub-check verdict.
///
/// `NotImplemented` marks a check whose real input is not wired in yet
/// (currently only the password expiration check). It aggregates as passing
/// but stays distinguishable in reports and counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Pass,
    Fail,
    NotImplemented,
}

impl Outcome {
    /// True when the observed value satisfied the policy (or the check is
    /// gated off / not implemented).
    pub fn passed(self) -> bool {
        !matches!(self, Outcome::Fail)
    }

    pub fn from_bool(ok: bool) -> Self {
        if ok { Outcome::Pass } else { Outcome::Fail }
    }
}

/// One failing sub-check, for the machine report.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Finding {
    /// Policy domain id (a top-level document key, e.g. `firewall_policy`).
    pub check_id: String,
    /// Sub-check code within the domain (e.g. `allowed_ports`).
    pub code: String,
    pub message: String,

    /// Check-specific structured payload (offending items, expected and
    /// observed values). Kept open-ended for forward compatibility.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub data: JsonValue,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Hostguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct HostguardData {
    pub domains_evaluated: u32,
    pub checks_evaluated: u32,
    pub checks_failed: u32,
    pub checks_not_implemented: u32,
}

/// A generic report envelope.
///
/// Keeping this generic allows hostguard to embed tool-specific data while
/// still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = HostguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    pub findings: Vec<Finding>,
    pub data: TData,
}

pub type HostguardReport = ReportEnvelope<HostguardData>;
