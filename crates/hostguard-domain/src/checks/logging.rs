use crate::model::LoggingFacts;
use crate::policy::LoggingPolicy;
use crate::report::LoggingReport;
use hostguard_types::Outcome;

/// Three independent exact-equality checks; a policy may require any of
/// these settings be off.
pub fn run(facts: &LoggingFacts, policy: &LoggingPolicy) -> LoggingReport {
    LoggingReport {
        auth_failures_enabled: Outcome::from_bool(
            facts.auth_failures_enabled == policy.auth_failures_enabled,
        ),
        log_rotation: Outcome::from_bool(facts.log_rotation == policy.log_rotation),
        syslog_forwarding_enabled: Outcome::from_bool(
            facts.syslog_forwarding_enabled == policy.syslog_forwarding_enabled,
        ),
    }
}
