use super::ports;
use crate::model::FirewallFacts;
use crate::policy::FirewallPolicy;
use crate::report::FirewallReport;
use hostguard_types::Outcome;

pub fn run(facts: &FirewallFacts, policy: &FirewallPolicy) -> FirewallReport {
    let unexpected_ports = ports::unexpected(&facts.open_ports, &policy.allowed_ports);

    FirewallReport {
        allowed_ports: Outcome::from_bool(unexpected_ports.is_empty()),
        // Equality, not truthiness: policy may expect the flag either way.
        default_deny: Outcome::from_bool(facts.default_deny == policy.deny_all_default),
        unexpected_ports,
    }
}
