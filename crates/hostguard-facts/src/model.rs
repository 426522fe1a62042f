use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Facts document schema v1. Mirrors the policy document's shape: one
/// object per domain under the same top-level keys, so a collector can emit
/// both from one description of the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FactsDocumentV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password_policy: Option<PasswordFactsV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub firewall_policy: Option<FirewallFactsV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logging_policy: Option<LoggingFactsV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_policy: Option<UserFactsV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_policy: Option<ServiceFactsV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_policy: Option<FileFactsV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patch_policy: Option<PatchFactsV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_policy: Option<NetworkFactsV1>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint_policy: Option<EndpointFactsV1>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PasswordFactsV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FirewallFactsV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_ports: Option<Vec<u16>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_deny: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct LoggingFactsV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_failures_enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_rotation: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syslog_forwarding_enabled: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct UserFactsV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive_days: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_users: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceFactsV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_services: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_ports: Option<Vec<u16>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FileFactsV1 {
    /// Observed permission string per path. May be omitted entirely; a
    /// critical path with no entry reads as permission "0".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file_permissions: Option<BTreeMap<String, String>>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PatchFactsV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_updates: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NetworkFactsV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_root_login: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tls_version: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct EndpointFactsV1 {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antivirus_running: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub definitions_up_to_date: Option<bool>,
}
