use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `policies.json` schema v1.
///
/// This is a *user-facing* document model: every setting is optional here so
/// a malformed file and a missing setting produce different errors, and so
/// forward-compat additions stay cheap. Required-ness is enforced by
/// resolution, not by serde.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyDocumentV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_policy: Option<PasswordPolicyV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_policy: Option<FirewallPolicyV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_policy: Option<LoggingPolicyV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_policy: Option<UserPolicyV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_policy: Option<ServicePolicyV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_policy: Option<FilePolicyV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_policy: Option<PatchPolicyV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_policy: Option<NetworkPolicyV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_policy: Option<EndpointPolicyV1>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PasswordPolicyV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_uppercase: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_lowercase: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_digit: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub require_special: Option<bool>,
    /// Optional; reserved for the expiration check.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_age_days: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FirewallPolicyV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_ports: Option<Vec<u16>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deny_all_default: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LoggingPolicyV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_failures_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_rotation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syslog_forwarding_enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UserPolicyV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_inactive_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_admin_users: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServicePolicyV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_services: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_ports: Option<Vec<u16>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FilePolicyV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_files: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PatchPolicyV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_pending_updates: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkPolicyV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_root_login: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_min_version: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EndpointPolicyV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antivirus_running: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions_up_to_date: Option<bool>,
}
