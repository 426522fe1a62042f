use std::collections::BTreeSet;

/// Open ports that are not members of the allowed set, preserving the
/// observed order and duplicates as given.
pub fn unexpected(open_ports: &[u16], allowed: &BTreeSet<u16>) -> Vec<u16> {
    open_ports
        .iter()
        .copied()
        .filter(|p| !allowed.contains(p))
        .collect()
}
