use crate::model::{
    EndpointFacts, FileFacts, FirewallFacts, HostFacts, LoggingFacts, NetworkFacts, PasswordFacts,
    PatchFacts, ServiceFacts, UserFacts,
};
use crate::policy::{
    EndpointPolicy, FilePolicy, FirewallPolicy, LoggingPolicy, NetworkPolicy, PasswordPolicy,
    PatchPolicy, PolicyDocument, ServicePolicy, UserPolicy,
};
use std::collections::{BTreeMap, BTreeSet};

pub fn password_policy(min_length: usize, all_classes: bool) -> PasswordPolicy {
    PasswordPolicy {
        min_length,
        require_uppercase: all_classes,
        require_lowercase: all_classes,
        require_digit: all_classes,
        require_special: all_classes,
        max_age_days: None,
    }
}

pub fn ports(list: &[u16]) -> BTreeSet<u16> {
    list.iter().copied().collect()
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn perms(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// A representative policy covering every domain.
pub fn sample_policy() -> PolicyDocument {
    PolicyDocument {
        password: PasswordPolicy {
            min_length: 12,
            require_uppercase: true,
            require_lowercase: true,
            require_digit: true,
            require_special: true,
            max_age_days: Some(90),
        },
        firewall: FirewallPolicy {
            allowed_ports: ports(&[22, 443]),
            deny_all_default: true,
        },
        logging: LoggingPolicy {
            auth_failures_enabled: true,
            log_rotation: true,
            syslog_forwarding_enabled: true,
        },
        users: UserPolicy {
            max_inactive_days: 90,
            max_admin_users: 2,
        },
        services: ServicePolicy {
            disable_services: names(&["telnet", "ftp"]),
            allowed_ports: ports(&[22, 443]),
        },
        files: FilePolicy {
            critical_files: perms(&[("/etc/passwd", "644"), ("/etc/shadow", "600")]),
        },
        patch: PatchPolicy {
            max_pending_updates: 5,
        },
        network: NetworkPolicy {
            ssh_root_login: false,
            tls_min_version: "1.2".to_string(),
        },
        endpoint: EndpointPolicy {
            antivirus_running: true,
            definitions_up_to_date: true,
        },
    }
}

/// Facts that satisfy every check of the given policy.
pub fn compliant_facts(policy: &PolicyDocument) -> HostFacts {
    HostFacts {
        password: PasswordFacts {
            password: "Str0ng!Passw0rd".to_string(),
        },
        firewall: FirewallFacts {
            open_ports: policy.firewall.allowed_ports.iter().copied().collect(),
            default_deny: policy.firewall.deny_all_default,
        },
        logging: LoggingFacts {
            auth_failures_enabled: policy.logging.auth_failures_enabled,
            log_rotation: policy.logging.log_rotation,
            syslog_forwarding_enabled: policy.logging.syslog_forwarding_enabled,
        },
        users: UserFacts {
            inactive_days: policy.users.max_inactive_days,
            admin_users: policy.users.max_admin_users,
        },
        services: ServiceFacts {
            running_services: names(&["sshd", "cron"]),
            open_ports: policy.services.allowed_ports.iter().copied().collect(),
        },
        files: FileFacts {
            file_permissions: policy.files.critical_files.clone(),
        },
        patch: PatchFacts {
            pending_updates: policy.patch.max_pending_updates,
        },
        network: NetworkFacts {
            ssh_root_login: policy.network.ssh_root_login,
            tls_version: policy.network.tls_min_version.clone(),
        },
        endpoint: EndpointFacts {
            antivirus_running: policy.endpoint.antivirus_running,
            definitions_up_to_date: policy.endpoint.definitions_up_to_date,
        },
    }
}
