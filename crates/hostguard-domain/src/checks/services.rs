use super::ports;
use crate::model::ServiceFacts;
use crate::policy::ServicePolicy;
use crate::report::ServiceReport;
use hostguard_types::Outcome;

pub fn run(facts: &ServiceFacts, policy: &ServicePolicy) -> ServiceReport {
    // Case-sensitive exact name match, offenders in policy order.
    let running_disabled: Vec<String> = policy
        .disable_services
        .iter()
        .filter(|name| facts.running_services.contains(name))
        .cloned()
        .collect();

    let unexpected_ports = ports::unexpected(&facts.open_ports, &policy.allowed_ports);

    ServiceReport {
        disable_services: Outcome::from_bool(running_disabled.is_empty()),
        allowed_ports: Outcome::from_bool(unexpected_ports.is_empty()),
        running_disabled,
        unexpected_ports,
    }
}
