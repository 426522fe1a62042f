use hostguard_types::{ids, Outcome, Verdict};

/// One named sub-check result in the uniform projection consumed by
/// renderers and the findings builder. For most domains `code` is a stable
/// sub-check id; for the file domain it is the critical file path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckEntry {
    pub code: String,
    pub outcome: Outcome,
    /// Items of the observed collection that violate an allow-list policy
    /// (pre-rendered). Empty for scalar checks and for passing entries.
    pub offending: Vec<String>,
}

impl CheckEntry {
    fn plain(code: &str, outcome: Outcome) -> Self {
        CheckEntry {
            code: code.to_string(),
            outcome,
            offending: Vec::new(),
        }
    }
}

/// Password class checks. Each `require_*` class that policy does not
/// require reports `Pass` regardless of password content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PasswordReport {
    pub length: Outcome,
    pub uppercase: Outcome,
    pub lowercase: Outcome,
    pub digit: Outcome,
    pub special: Outcome,
    /// Placeholder until a last-changed-date fact is wired in.
    pub expiration_days: Outcome,
}

impl PasswordReport {
    pub fn entries(&self) -> Vec<CheckEntry> {
        vec![
            CheckEntry::plain(ids::CODE_LENGTH, self.length),
            CheckEntry::plain(ids::CODE_UPPERCASE, self.uppercase),
            CheckEntry::plain(ids::CODE_LOWERCASE, self.lowercase),
            CheckEntry::plain(ids::CODE_DIGIT, self.digit),
            CheckEntry::plain(ids::CODE_SPECIAL, self.special),
            CheckEntry::plain(ids::CODE_EXPIRATION_DAYS, self.expiration_days),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FirewallReport {
    pub allowed_ports: Outcome,
    pub default_deny: Outcome,
    /// Open ports outside the allowed set, input order and duplicates
    /// preserved.
    pub unexpected_ports: Vec<u16>,
}

impl FirewallReport {
    pub fn entries(&self) -> Vec<CheckEntry> {
        vec![
            CheckEntry {
                code: ids::CODE_ALLOWED_PORTS.to_string(),
                outcome: self.allowed_ports,
                offending: render_ports(&self.unexpected_ports),
            },
            CheckEntry::plain(ids::CODE_DEFAULT_DENY, self.default_deny),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggingReport {
    pub auth_failures_enabled: Outcome,
    pub log_rotation: Outcome,
    pub syslog_forwarding_enabled: Outcome,
}

impl LoggingReport {
    pub fn entries(&self) -> Vec<CheckEntry> {
        vec![
            CheckEntry::plain(ids::CODE_AUTH_FAILURES_ENABLED, self.auth_failures_enabled),
            CheckEntry::plain(ids::CODE_LOG_ROTATION, self.log_rotation),
            CheckEntry::plain(
                ids::CODE_SYSLOG_FORWARDING_ENABLED,
                self.syslog_forwarding_enabled,
            ),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserReport {
    pub max_inactive_days: Outcome,
    pub max_admin_users: Outcome,
}

impl UserReport {
    pub fn entries(&self) -> Vec<CheckEntry> {
        vec![
            CheckEntry::plain(ids::CODE_MAX_INACTIVE_DAYS, self.max_inactive_days),
            CheckEntry::plain(ids::CODE_MAX_ADMIN_USERS, self.max_admin_users),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceReport {
    pub disable_services: Outcome,
    pub allowed_ports: Outcome,
    /// Must-be-disabled services found running, in policy order.
    pub running_disabled: Vec<String>,
    pub unexpected_ports: Vec<u16>,
}

impl ServiceReport {
    pub fn entries(&self) -> Vec<CheckEntry> {
        vec![
            CheckEntry {
                code: ids::CODE_DISABLE_SERVICES.to_string(),
                outcome: self.disable_services,
                offending: self.running_disabled.clone(),
            },
            CheckEntry {
                code: ids::CODE_ALLOWED_PORTS.to_string(),
                outcome: self.allowed_ports,
                offending: render_ports(&self.unexpected_ports),
            },
        ]
    }
}

/// One critical file's permission check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileCheck {
    pub path: String,
    pub required: String,
    /// `"0"` when the facts carried no entry for this path.
    pub observed: String,
    pub outcome: Outcome,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileReport {
    /// One entry per critical path named in policy, in policy (path) order.
    pub files: Vec<FileCheck>,
}

impl FileReport {
    pub fn entries(&self) -> Vec<CheckEntry> {
        self.files
            .iter()
            .map(|f| CheckEntry {
                code: f.path.clone(),
                outcome: f.outcome,
                offending: Vec::new(),
            })
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatchReport {
    pub pending_updates: Outcome,
}

impl PatchReport {
    pub fn entries(&self) -> Vec<CheckEntry> {
        vec![CheckEntry::plain(
            ids::CODE_PENDING_UPDATES,
            self.pending_updates,
        )]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NetworkReport {
    pub ssh_root_login: Outcome,
    pub tls_min_version: Outcome,
}

impl NetworkReport {
    pub fn entries(&self) -> Vec<CheckEntry> {
        vec![
            CheckEntry::plain(ids::CODE_SSH_ROOT_LOGIN, self.ssh_root_login),
            CheckEntry::plain(ids::CODE_TLS_MIN_VERSION, self.tls_min_version),
        ]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointReport {
    pub antivirus_running: Outcome,
    pub definitions_up_to_date: Outcome,
}

impl EndpointReport {
    pub fn entries(&self) -> Vec<CheckEntry> {
        vec![
            CheckEntry::plain(ids::CODE_ANTIVIRUS_RUNNING, self.antivirus_running),
            CheckEntry::plain(
                ids::CODE_DEFINITIONS_UP_TO_DATE,
                self.definitions_up_to_date,
            ),
        ]
    }
}

/// One domain's results in the uniform projection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainResult {
    pub domain: &'static str,
    pub entries: Vec<CheckEntry>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckCounts {
    pub evaluated: u32,
    pub failed: u32,
    pub not_implemented: u32,
}

impl CheckCounts {
    pub fn from_domains(domains: &[DomainResult]) -> Self {
        let mut counts = CheckCounts::default();
        for domain in domains {
            for entry in &domain.entries {
                counts.evaluated += 1;
                match entry.outcome {
                    Outcome::Fail => counts.failed += 1,
                    Outcome::NotImplemented => counts.not_implemented += 1,
                    Outcome::Pass => {}
                }
            }
        }
        counts
    }
}

/// Full evaluation result: all nine typed domain reports plus the aggregate
/// verdict and counts. Produced fresh per run, never merged across runs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaselineReport {
    pub verdict: Verdict,
    pub counts: CheckCounts,
    pub password: PasswordReport,
    pub firewall: FirewallReport,
    pub logging: LoggingReport,
    pub users: UserReport,
    pub services: ServiceReport,
    pub files: FileReport,
    pub patch: PatchReport,
    pub network: NetworkReport,
    pub endpoint: EndpointReport,
}

impl BaselineReport {
    /// All domains in fixed document order. This order is the report order
    /// and the finding order; nothing depends on evaluation order beyond it.
    pub fn domains(&self) -> Vec<DomainResult> {
        vec![
            DomainResult {
                domain: ids::DOMAIN_PASSWORD,
                entries: self.password.entries(),
            },
            DomainResult {
                domain: ids::DOMAIN_FIREWALL,
                entries: self.firewall.entries(),
            },
            DomainResult {
                domain: ids::DOMAIN_LOGGING,
                entries: self.logging.entries(),
            },
            DomainResult {
                domain: ids::DOMAIN_USER,
                entries: self.users.entries(),
            },
            DomainResult {
                domain: ids::DOMAIN_SERVICE,
                entries: self.services.entries(),
            },
            DomainResult {
                domain: ids::DOMAIN_FILE,
                entries: self.files.entries(),
            },
            DomainResult {
                domain: ids::DOMAIN_PATCH,
                entries: self.patch.entries(),
            },
            DomainResult {
                domain: ids::DOMAIN_NETWORK,
                entries: self.network.entries(),
            },
            DomainResult {
                domain: ids::DOMAIN_ENDPOINT,
                entries: self.endpoint.entries(),
            },
        ]
    }
}

fn render_ports(ports: &[u16]) -> Vec<String> {
    ports.iter().map(|p| p.to_string()).collect()
}
