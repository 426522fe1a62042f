//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Offending-port lists (exactness, order, duplicates)
//! - Inclusive threshold boundaries
//! - Version-ordering laws
//! - Verdict aggregation

use crate::checks::{firewall, password, patch, users};
use crate::engine::evaluate;
use crate::model::{FirewallFacts, HostFacts, PasswordFacts, PatchFacts, UserFacts};
use crate::policy::{FirewallPolicy, PatchPolicy, UserPolicy};
use crate::test_support::{password_policy, sample_policy};
use crate::version;
use hostguard_types::Outcome;
use proptest::prelude::*;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Strategy for port lists with realistic duplication.
fn arb_port_list() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0u16..1024, 0..20)
}

fn arb_port_set() -> impl Strategy<Value = BTreeSet<u16>> {
    prop::collection::btree_set(0u16..1024, 0..10)
}

/// Strategy for dotted version strings with multi-digit components.
fn arb_version() -> impl Strategy<Value = String> {
    prop::collection::vec(0u64..100, 1..4)
        .prop_map(|parts| {
            parts
                .iter()
                .map(|p| p.to_string())
                .collect::<Vec<_>>()
                .join(".")
        })
}

fn numeric_components(v: &str) -> Vec<u64> {
    v.split('.').map(|p| p.parse::<u64>().unwrap()).collect()
}

proptest! {
    /// The offending list is exactly the observed ports not in the allowed
    /// set, in observed order, duplicates preserved; the verdict is true iff
    /// that list is empty (i.e. the observed list is a subset).
    #[test]
    fn firewall_offending_ports_are_exact(
        open_ports in arb_port_list(),
        allowed in arb_port_set(),
    ) {
        let facts = FirewallFacts { open_ports: open_ports.clone(), default_deny: true };
        let policy = FirewallPolicy { allowed_ports: allowed.clone(), deny_all_default: true };

        let report = firewall::run(&facts, &policy);

        let expected: Vec<u16> = open_ports
            .iter()
            .copied()
            .filter(|p| !allowed.contains(p))
            .collect();
        prop_assert_eq!(&report.unexpected_ports, &expected);
        prop_assert_eq!(
            report.allowed_ports == Outcome::Pass,
            expected.is_empty()
        );
    }

    /// pending <= max passes, pending > max fails, for any pair.
    #[test]
    fn patch_threshold_is_boundary_inclusive(pending in 0u32..10_000, max in 0u32..10_000) {
        let report = patch::run(
            &PatchFacts { pending_updates: pending },
            &PatchPolicy { max_pending_updates: max },
        );
        prop_assert_eq!(report.pending_updates == Outcome::Pass, pending <= max);
    }

    /// Same inclusive-boundary law for both user thresholds.
    #[test]
    fn user_thresholds_are_boundary_inclusive(
        inactive in 0u32..1_000,
        max_inactive in 0u32..1_000,
        admins in 0u32..100,
        max_admins in 0u32..100,
    ) {
        let report = users::run(
            &UserFacts { inactive_days: inactive, admin_users: admins },
            &UserPolicy { max_inactive_days: max_inactive, max_admin_users: max_admins },
        );
        prop_assert_eq!(report.max_inactive_days == Outcome::Pass, inactive <= max_inactive);
        prop_assert_eq!(report.max_admin_users == Outcome::Pass, admins <= max_admins);
    }

    /// A class whose require flag is off passes for any password content.
    #[test]
    fn not_required_classes_always_pass(pw in ".*") {
        let facts = PasswordFacts { password: pw };
        let report = password::run(&facts, &password_policy(0, false));

        prop_assert_eq!(report.uppercase, Outcome::Pass);
        prop_assert_eq!(report.lowercase, Outcome::Pass);
        prop_assert_eq!(report.digit, Outcome::Pass);
        prop_assert_eq!(report.special, Outcome::Pass);
    }

    /// Version comparison agrees with numeric tuple comparison (padded with
    /// zeros), which lexicographic string comparison does not.
    #[test]
    fn version_compare_matches_numeric_tuples(a in arb_version(), b in arb_version()) {
        let mut left = numeric_components(&a);
        let mut right = numeric_components(&b);
        let len = left.len().max(right.len());
        left.resize(len, 0);
        right.resize(len, 0);

        prop_assert_eq!(version::compare(&a, &b), left.cmp(&right));
    }

    /// Ordering laws: reflexivity and antisymmetry.
    #[test]
    fn version_compare_is_an_ordering(a in arb_version(), b in arb_version()) {
        prop_assert_eq!(version::compare(&a, &a), Ordering::Equal);
        prop_assert_eq!(version::compare(&a, &b), version::compare(&b, &a).reverse());
    }

    /// The aggregate verdict fails iff at least one entry failed, over
    /// arbitrary scalar-fact perturbations of a compliant host.
    #[test]
    fn verdict_fails_iff_some_entry_failed(
        pending in 0u32..20,
        inactive in 0u32..200,
        admins in 0u32..10,
        open_port in 1u16..1024,
    ) {
        let policy = sample_policy();
        let facts = HostFacts {
            patch: PatchFacts { pending_updates: pending },
            users: UserFacts { inactive_days: inactive, admin_users: admins },
            firewall: FirewallFacts { open_ports: vec![open_port], default_deny: true },
            ..crate::test_support::compliant_facts(&policy)
        };

        let report = evaluate(&facts, &policy);
        let any_failed = report
            .domains()
            .iter()
            .flat_map(|d| d.entries.clone())
            .any(|e| e.outcome == Outcome::Fail);

        prop_assert_eq!(report.verdict == hostguard_types::Verdict::Fail, any_failed);
    }
}
