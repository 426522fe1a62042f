use crate::checks;
use crate::model::HostFacts;
use crate::policy::PolicyDocument;
use crate::report::{BaselineReport, CheckCounts, DomainResult};
use hostguard_types::{Finding, Outcome, Verdict};
use serde_json::json;

/// Fan out to the nine checkers and aggregate. Checkers are mutually
/// independent; the fixed order here only fixes report and finding order.
pub fn evaluate(facts: &HostFacts, policy: &PolicyDocument) -> BaselineReport {
    let mut report = BaselineReport {
        verdict: Verdict::Pass,
        counts: CheckCounts::default(),
        password: checks::password::run(&facts.password, &policy.password),
        firewall: checks::firewall::run(&facts.firewall, &policy.firewall),
        logging: checks::logging::run(&facts.logging, &policy.logging),
        users: checks::users::run(&facts.users, &policy.users),
        services: checks::services::run(&facts.services, &policy.services),
        files: checks::files::run(&facts.files, &policy.files),
        patch: checks::patch::run(&facts.patch, &policy.patch),
        network: checks::network::run(&facts.network, &policy.network),
        endpoint: checks::endpoint::run(&facts.endpoint, &policy.endpoint),
    };

    let domains = report.domains();
    report.counts = CheckCounts::from_domains(&domains);
    report.verdict = compute_verdict(&domains);
    report
}

/// Project failing sub-checks into findings for the report envelope, in
/// domain order then sub-check declaration order (deterministic by
/// construction, no sorting needed).
pub fn findings(report: &BaselineReport) -> Vec<Finding> {
    let mut out = Vec::new();
    for domain in report.domains() {
        for entry in &domain.entries {
            if entry.outcome != Outcome::Fail {
                continue;
            }
            let message = if entry.offending.is_empty() {
                format!("{}: '{}' does not meet policy", domain.domain, entry.code)
            } else {
                format!(
                    "{}: '{}' does not meet policy (offending: {})",
                    domain.domain,
                    entry.code,
                    entry.offending.join(", ")
                )
            };
            out.push(Finding {
                check_id: domain.domain.to_string(),
                code: entry.code.clone(),
                message,
                data: json!({ "offending": entry.offending }),
            });
        }
    }
    out
}

fn compute_verdict(domains: &[DomainResult]) -> Verdict {
    let any_failed = domains
        .iter()
        .flat_map(|d| d.entries.iter())
        .any(|e| e.outcome == Outcome::Fail);
    if any_failed { Verdict::Fail } else { Verdict::Pass }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{compliant_facts, sample_policy};
    use hostguard_types::ids;

    #[test]
    fn compliant_host_passes_every_check() {
        let policy = sample_policy();
        let facts = compliant_facts(&policy);

        let report = evaluate(&facts, &policy);
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.counts.failed, 0);
        assert_eq!(report.counts.not_implemented, 1);
        assert!(findings(&report).is_empty());
    }

    #[test]
    fn single_failure_flips_the_verdict() {
        let policy = sample_policy();
        let mut facts = compliant_facts(&policy);
        facts.patch.pending_updates = policy.patch.max_pending_updates + 1;

        let report = evaluate(&facts, &policy);
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.counts.failed, 1);

        let findings = findings(&report);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].check_id, ids::DOMAIN_PATCH);
        assert_eq!(findings[0].code, ids::CODE_PENDING_UPDATES);
    }

    #[test]
    fn offending_ports_appear_in_finding_message_and_data() {
        let policy = sample_policy();
        let mut facts = compliant_facts(&policy);
        facts.firewall.open_ports = vec![22, 443, 8080];

        let report = evaluate(&facts, &policy);
        let findings = findings(&report);
        let fw = findings
            .iter()
            .find(|f| f.check_id == ids::DOMAIN_FIREWALL)
            .expect("firewall finding");
        assert_eq!(fw.code, ids::CODE_ALLOWED_PORTS);
        assert!(fw.message.contains("8080"));
        assert_eq!(fw.data["offending"][0], "8080");
    }

    #[test]
    fn evaluation_reports_all_domains_even_when_many_fail() {
        let policy = sample_policy();
        // Default facts violate most domains at once.
        let report = evaluate(&HostFacts::default(), &policy);

        let domains = report.domains();
        assert_eq!(domains.len(), 9);
        let ids: Vec<&str> = domains.iter().map(|d| d.domain).collect();
        assert_eq!(ids, hostguard_types::ids::DOMAINS);
        assert_eq!(report.verdict, Verdict::Fail);
    }

    #[test]
    fn counts_line_up_with_entries() {
        let policy = sample_policy();
        let facts = compliant_facts(&policy);
        let report = evaluate(&facts, &policy);

        let total: usize = report.domains().iter().map(|d| d.entries.len()).sum();
        assert_eq!(report.counts.evaluated as usize, total);
    }
}
