use std::collections::{BTreeMap, BTreeSet};

/// Fully resolved policy: every required setting present and typed.
///
/// Constructed once at process start by `hostguard-policy` (which is where
/// fail-closed resolution of missing keys happens) and passed by reference
/// into every checker. Immutable thereafter.
#[derive(Clone, Debug)]
pub struct PolicyDocument {
    pub password: PasswordPolicy,
    pub firewall: FirewallPolicy,
    pub logging: LoggingPolicy,
    pub users: UserPolicy,
    pub services: ServicePolicy,
    pub files: FilePolicy,
    pub patch: PatchPolicy,
    pub network: NetworkPolicy,
    pub endpoint: EndpointPolicy,
}

#[derive(Clone, Debug)]
pub struct PasswordPolicy {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_lowercase: bool,
    pub require_digit: bool,
    pub require_special: bool,
    /// Reserved for the expiration check; no checker consumes it yet.
    pub max_age_days: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct FirewallPolicy {
    pub allowed_ports: BTreeSet<u16>,
    /// Expected state of the default-deny flag. Equality, not truthiness: a
    /// policy may require the flag be off.
    pub deny_all_default: bool,
}

#[derive(Clone, Debug)]
pub struct LoggingPolicy {
    pub auth_failures_enabled: bool,
    pub log_rotation: bool,
    pub syslog_forwarding_enabled: bool,
}

#[derive(Clone, Debug)]
pub struct UserPolicy {
    pub max_inactive_days: u32,
    pub max_admin_users: u32,
}

#[derive(Clone, Debug)]
pub struct ServicePolicy {
    /// Services that must not be running. Order is preserved for reporting.
    pub disable_services: Vec<String>,
    pub allowed_ports: BTreeSet<u16>,
}

#[derive(Clone, Debug)]
pub struct FilePolicy {
    /// Required permission string per critical file path. Compared verbatim;
    /// callers must supply pre-normalized permission strings.
    pub critical_files: BTreeMap<String, String>,
}

#[derive(Clone, Debug)]
pub struct PatchPolicy {
    pub max_pending_updates: u32,
}

#[derive(Clone, Debug)]
pub struct NetworkPolicy {
    pub ssh_root_login: bool,
    pub tls_min_version: String,
}

#[derive(Clone, Debug)]
pub struct EndpointPolicy {
    pub antivirus_running: bool,
    pub definitions_up_to_date: bool,
}
