use crate::model::PasswordFacts;
use crate::policy::PasswordPolicy;
use crate::report::PasswordReport;
use hostguard_types::Outcome;

/// Character classes follow the ASCII partition: letters, digits, and
/// "anything else" is special. A class whose `require_*` flag is off passes
/// unconditionally.
pub fn run(facts: &PasswordFacts, policy: &PasswordPolicy) -> PasswordReport {
    let password = facts.password.as_str();

    PasswordReport {
        length: Outcome::from_bool(password.chars().count() >= policy.min_length),
        uppercase: class_check(policy.require_uppercase, password, |c| {
            c.is_ascii_uppercase()
        }),
        lowercase: class_check(policy.require_lowercase, password, |c| {
            c.is_ascii_lowercase()
        }),
        digit: class_check(policy.require_digit, password, |c| c.is_ascii_digit()),
        special: class_check(policy.require_special, password, |c| {
            !c.is_ascii_alphanumeric()
        }),
        // No last-changed-date fact exists yet; `policy.max_age_days` is
        // parsed but unused until one does.
        expiration_days: Outcome::NotImplemented,
    }
}

fn class_check(required: bool, password: &str, class: impl Fn(char) -> bool) -> Outcome {
    if !required {
        return Outcome::Pass;
    }
    Outcome::from_bool(password.chars().any(class))
}
