use crate::model::UserFacts;
use crate::policy::UserPolicy;
use crate::report::UserReport;
use hostguard_types::Outcome;

/// Both thresholds are boundary inclusive: observed == maximum passes.
pub fn run(facts: &UserFacts, policy: &UserPolicy) -> UserReport {
    UserReport {
        max_inactive_days: Outcome::from_bool(facts.inactive_days <= policy.max_inactive_days),
        max_admin_users: Outcome::from_bool(facts.admin_users <= policy.max_admin_users),
    }
}
