//! Stable identifiers for policy domains and sub-check codes.
//!
//! Domain ids double as the top-level keys of the policy and facts
//! documents, so they are part of the external file format and must not
//! change. `code` is a short snake_case discriminator within a domain.

// Domains
pub const DOMAIN_PASSWORD: &str = "password_policy";
pub const DOMAIN_FIREWALL: &str = "firewall_policy";
pub const DOMAIN_LOGGING: &str = "logging_policy";
pub const DOMAIN_USER: &str = "user_policy";
pub const DOMAIN_SERVICE: &str = "service_policy";
pub const DOMAIN_FILE: &str = "file_policy";
pub const DOMAIN_PATCH: &str = "patch_policy";
pub const DOMAIN_NETWORK: &str = "network_policy";
pub const DOMAIN_ENDPOINT: &str = "endpoint_policy";

/// All domains in evaluation (and report) order.
pub const DOMAINS: [&str; 9] = [
    DOMAIN_PASSWORD,
    DOMAIN_FIREWALL,
    DOMAIN_LOGGING,
    DOMAIN_USER,
    DOMAIN_SERVICE,
    DOMAIN_FILE,
    DOMAIN_PATCH,
    DOMAIN_NETWORK,
    DOMAIN_ENDPOINT,
];

// Codes: password_policy
pub const CODE_LENGTH: &str = "length";
pub const CODE_UPPERCASE: &str = "uppercase";
pub const CODE_LOWERCASE: &str = "lowercase";
pub const CODE_DIGIT: &str = "digit";
pub const CODE_SPECIAL: &str = "special";
pub const CODE_EXPIRATION_DAYS: &str = "expiration_days";

// Codes: firewall_policy / service_policy
pub const CODE_ALLOWED_PORTS: &str = "allowed_ports";
pub const CODE_DEFAULT_DENY: &str = "default_deny";
pub const CODE_DISABLE_SERVICES: &str = "disable_services";

// Codes: logging_policy
pub const CODE_AUTH_FAILURES_ENABLED: &str = "auth_failures_enabled";
pub const CODE_LOG_ROTATION: &str = "log_rotation";
pub const CODE_SYSLOG_FORWARDING_ENABLED: &str = "syslog_forwarding_enabled";

// Codes: user_policy
pub const CODE_MAX_INACTIVE_DAYS: &str = "max_inactive_days";
pub const CODE_MAX_ADMIN_USERS: &str = "max_admin_users";

// Codes: patch_policy
pub const CODE_PENDING_UPDATES: &str = "pending_updates";

// Codes: network_policy
pub const CODE_SSH_ROOT_LOGIN: &str = "ssh_root_login";
pub const CODE_TLS_MIN_VERSION: &str = "tls_min_version";

// Codes: endpoint_policy
pub const CODE_ANTIVIRUS_RUNNING: &str = "antivirus_running";
pub const CODE_DEFINITIONS_UP_TO_DATE: &str = "definitions_up_to_date";

// Tool-level
pub const CHECK_TOOL_RUNTIME: &str = "tool.runtime";
pub const CODE_RUNTIME_ERROR: &str = "runtime_error";
