use std::collections::BTreeMap;

/// Observed configuration facts for one host.
///
/// The domain does not collect these; they come from the facts document (or,
/// in a production deployment, a real collector) and are discarded after the
/// run.
#[derive(Clone, Debug, Default)]
pub struct HostFacts {
    pub password: PasswordFacts,
    pub firewall: FirewallFacts,
    pub logging: LoggingFacts,
    pub users: UserFacts,
    pub services: ServiceFacts,
    pub files: FileFacts,
    pub patch: PatchFacts,
    pub network: NetworkFacts,
    pub endpoint: EndpointFacts,
}

#[derive(Clone, Debug, Default)]
pub struct PasswordFacts {
    /// Candidate password under evaluation.
    pub password: String,
}

#[derive(Clone, Debug, Default)]
pub struct FirewallFacts {
    /// Currently open ports, in observation order, duplicates preserved.
    pub open_ports: Vec<u16>,
    /// Whether a default-deny inbound rule is active.
    pub default_deny: bool,
}

#[derive(Clone, Debug, Default)]
pub struct LoggingFacts {
    pub auth_failures_enabled: bool,
    pub log_rotation: bool,
    pub syslog_forwarding_enabled: bool,
}

#[derive(Clone, Debug, Default)]
pub struct UserFacts {
    /// Days since the most inactive account was last seen.
    pub inactive_days: u32,
    /// Number of accounts with administrative rights.
    pub admin_users: u32,
}

#[derive(Clone, Debug, Default)]
pub struct ServiceFacts {
    pub running_services: Vec<String>,
    /// Ports the service layer observes as listening; kept separate from the
    /// firewall's view so each domain's facts stand alone.
    pub open_ports: Vec<u16>,
}

#[derive(Clone, Debug, Default)]
pub struct FileFacts {
    /// Observed permission string per file path. A critical path with no
    /// entry here reads as permission `"0"` (no permissions / file absent).
    pub file_permissions: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default)]
pub struct PatchFacts {
    pub pending_updates: u32,
}

#[derive(Clone, Debug, Default)]
pub struct NetworkFacts {
    pub ssh_root_login: bool,
    /// Negotiable TLS version, e.g. `"1.2"`.
    pub tls_version: String,
}

#[derive(Clone, Debug, Default)]
pub struct EndpointFacts {
    pub antivirus_running: bool,
    pub definitions_up_to_date: bool,
}
