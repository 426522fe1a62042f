use crate::model::NetworkFacts;
use crate::policy::NetworkPolicy;
use crate::report::NetworkReport;
use crate::version;
use hostguard_types::Outcome;

pub fn run(facts: &NetworkFacts, policy: &NetworkPolicy) -> NetworkReport {
    NetworkReport {
        // Equality, not truthiness: a policy may permit root login.
        ssh_root_login: Outcome::from_bool(facts.ssh_root_login == policy.ssh_root_login),
        tls_min_version: Outcome::from_bool(version::at_least(
            &facts.tls_version,
            &policy.tls_min_version,
        )),
    }
}
