use crate::model::{
    EndpointPolicyV1, FilePolicyV1, FirewallPolicyV1, LoggingPolicyV1, NetworkPolicyV1,
    PasswordPolicyV1, PatchPolicyV1, PolicyDocumentV1, ServicePolicyV1, UserPolicyV1,
};
use anyhow::Context;
use hostguard_domain::policy::{
    EndpointPolicy, FilePolicy, FirewallPolicy, LoggingPolicy, NetworkPolicy, PasswordPolicy,
    PatchPolicy, PolicyDocument, ServicePolicy, UserPolicy,
};
use hostguard_types::ids;

/// Fail-closed resolution: every domain and every required setting must be
/// present, and the error names the missing `domain.setting`. The only
/// optional setting is `password_policy.max_age_days`.
pub fn resolve_policy(doc: PolicyDocumentV1) -> anyhow::Result<PolicyDocument> {
    Ok(PolicyDocument {
        password: resolve_password(domain(doc.password_policy, ids::DOMAIN_PASSWORD)?)?,
        firewall: resolve_firewall(domain(doc.firewall_policy, ids::DOMAIN_FIREWALL)?)?,
        logging: resolve_logging(domain(doc.logging_policy, ids::DOMAIN_LOGGING)?)?,
        users: resolve_users(domain(doc.user_policy, ids::DOMAIN_USER)?)?,
        services: resolve_services(domain(doc.service_policy, ids::DOMAIN_SERVICE)?)?,
        files: resolve_files(domain(doc.file_policy, ids::DOMAIN_FILE)?)?,
        patch: resolve_patch(domain(doc.patch_policy, ids::DOMAIN_PATCH)?)?,
        network: resolve_network(domain(doc.network_policy, ids::DOMAIN_NETWORK)?)?,
        endpoint: resolve_endpoint(domain(doc.endpoint_policy, ids::DOMAIN_ENDPOINT)?)?,
    })
}

fn domain<T>(value: Option<T>, name: &str) -> anyhow::Result<T> {
    value.with_context(|| format!("policy domain missing: {name}"))
}

fn require<T>(value: Option<T>, domain: &str, setting: &str) -> anyhow::Result<T> {
    value.with_context(|| format!("policy setting missing: {domain}.{setting}"))
}

fn resolve_password(d: PasswordPolicyV1) -> anyhow::Result<PasswordPolicy> {
    let dom = ids::DOMAIN_PASSWORD;
    Ok(PasswordPolicy {
        min_length: require(d.min_length, dom, "min_length")?,
        require_uppercase: require(d.require_uppercase, dom, "require_uppercase")?,
        require_lowercase: require(d.require_lowercase, dom, "require_lowercase")?,
        require_digit: require(d.require_digit, dom, "require_digit")?,
        require_special: require(d.require_special, dom, "require_special")?,
        max_age_days: d.max_age_days,
    })
}

fn resolve_firewall(d: FirewallPolicyV1) -> anyhow::Result<FirewallPolicy> {
    let dom = ids::DOMAIN_FIREWALL;
    Ok(FirewallPolicy {
        allowed_ports: require(d.allowed_ports, dom, "allowed_ports")?
            .into_iter()
            .collect(),
        deny_all_default: require(d.deny_all_default, dom, "deny_all_default")?,
    })
}

fn resolve_logging(d: LoggingPolicyV1) -> anyhow::Result<LoggingPolicy> {
    let dom = ids::DOMAIN_LOGGING;
    Ok(LoggingPolicy {
        auth_failures_enabled: require(d.auth_failures_enabled, dom, "auth_failures_enabled")?,
        log_rotation: require(d.log_rotation, dom, "log_rotation")?,
        syslog_forwarding_enabled: require(
            d.syslog_forwarding_enabled,
            dom,
            "syslog_forwarding_enabled",
        )?,
    })
}

fn resolve_users(d: UserPolicyV1) -> anyhow::Result<UserPolicy> {
    let dom = ids::DOMAIN_USER;
    Ok(UserPolicy {
        max_inactive_days: require(d.max_inactive_days, dom, "max_inactive_days")?,
        max_admin_users: require(d.max_admin_users, dom, "max_admin_users")?,
    })
}

fn resolve_services(d: ServicePolicyV1) -> anyhow::Result<ServicePolicy> {
    let dom = ids::DOMAIN_SERVICE;
    Ok(ServicePolicy {
        disable_services: require(d.disable_services, dom, "disable_services")?,
        allowed_ports: require(d.allowed_ports, dom, "allowed_ports")?
            .into_iter()
            .collect(),
    })
}

fn resolve_files(d: FilePolicyV1) -> anyhow::Result<FilePolicy> {
    Ok(FilePolicy {
        critical_files: require(d.critical_files, ids::DOMAIN_FILE, "critical_files")?,
    })
}

fn resolve_patch(d: PatchPolicyV1) -> anyhow::Result<PatchPolicy> {
    Ok(PatchPolicy {
        max_pending_updates: require(
            d.max_pending_updates,
            ids::DOMAIN_PATCH,
            "max_pending_updates",
        )?,
    })
}

fn resolve_network(d: NetworkPolicyV1) -> anyhow::Result<NetworkPolicy> {
    let dom = ids::DOMAIN_NETWORK;
    Ok(NetworkPolicy {
        ssh_root_login: require(d.ssh_root_login, dom, "ssh_root_login")?,
        tls_min_version: require(d.tls_min_version, dom, "tls_min_version")?,
    })
}

fn resolve_endpoint(d: EndpointPolicyV1) -> anyhow::Result<EndpointPolicy> {
    let dom = ids::DOMAIN_ENDPOINT;
    Ok(EndpointPolicy {
        antivirus_running: require(d.antivirus_running, dom, "antivirus_running")?,
        definitions_up_to_date: require(d.definitions_up_to_date, dom, "definitions_up_to_date")?,
    })
}

#[cfg(test)]
mod tests {
    use crate::{load_policy, parse_policy_json, starter_policy_json};

    #[test]
    fn starter_policy_resolves_cleanly() {
        let policy = load_policy(starter_policy_json()).expect("starter policy must load");
        assert_eq!(policy.password.min_length, 12);
        assert!(policy.firewall.allowed_ports.contains(&443));
        assert_eq!(policy.network.tls_min_version, "1.2");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = parse_policy_json("### not json").unwrap_err();
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn missing_domain_fails_closed_naming_the_domain() {
        let mut doc: serde_json::Value = serde_json::from_str(starter_policy_json()).unwrap();
        doc.as_object_mut().unwrap().remove("user_policy");

        let err = load_policy(&doc.to_string()).unwrap_err();
        assert!(err.to_string().contains("policy domain missing: user_policy"));
    }

    #[test]
    fn missing_required_setting_fails_closed_naming_the_key() {
        let mut doc: serde_json::Value = serde_json::from_str(starter_policy_json()).unwrap();
        doc["patch_policy"]
            .as_object_mut()
            .unwrap()
            .remove("max_pending_updates");

        let err = load_policy(&doc.to_string()).unwrap_err();
        assert!(err
            .to_string()
            .contains("policy setting missing: patch_policy.max_pending_updates"));
    }

    #[test]
    fn max_age_days_is_optional() {
        let mut doc: serde_json::Value = serde_json::from_str(starter_policy_json()).unwrap();
        doc["password_policy"]
            .as_object_mut()
            .unwrap()
            .remove("max_age_days");

        let policy = load_policy(&doc.to_string()).expect("max_age_days is optional");
        assert_eq!(policy.password.max_age_days, None);
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let mut doc: serde_json::Value = serde_json::from_str(starter_policy_json()).unwrap();
        doc["firewall_policy"]["future_setting"] = serde_json::json!(true);

        load_policy(&doc.to_string()).expect("unknown keys must not break loading");
    }
}
