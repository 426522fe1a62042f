use crate::model::EndpointFacts;
use crate::policy::EndpointPolicy;
use crate::report::EndpointReport;
use hostguard_types::Outcome;

pub fn run(facts: &EndpointFacts, policy: &EndpointPolicy) -> EndpointReport {
    EndpointReport {
        antivirus_running: Outcome::from_bool(
            facts.antivirus_running == policy.antivirus_running,
        ),
        definitions_up_to_date: Outcome::from_bool(
            facts.definitions_up_to_date == policy.definitions_up_to_date,
        ),
    }
}
