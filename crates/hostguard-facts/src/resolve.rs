use crate::model::{
    EndpointFactsV1, FactsDocumentV1, FileFactsV1, FirewallFactsV1, LoggingFactsV1,
    NetworkFactsV1, PasswordFactsV1, PatchFactsV1, ServiceFactsV1, UserFactsV1,
};
use anyhow::Context;
use hostguard_domain::model::{
    EndpointFacts, FileFacts, FirewallFacts, HostFacts, LoggingFacts, NetworkFacts, PasswordFacts,
    PatchFacts, ServiceFacts, UserFacts,
};
use hostguard_types::ids;

/// Fail-closed resolution, mirroring the policy side: every domain object
/// must be present and every fact a checker reads must be supplied. The one
/// exception is `file_policy.file_permissions`, which may be omitted — a
/// missing entry is itself meaningful to the file check ("no permissions /
/// file absent"), so an empty map is a valid observation.
pub fn resolve_facts(doc: FactsDocumentV1) -> anyhow::Result<HostFacts> {
    Ok(HostFacts {
        password: resolve_password(domain(doc.password_policy, ids::DOMAIN_PASSWORD)?)?,
        firewall: resolve_firewall(domain(doc.firewall_policy, ids::DOMAIN_FIREWALL)?)?,
        logging: resolve_logging(domain(doc.logging_policy, ids::DOMAIN_LOGGING)?)?,
        users: resolve_users(domain(doc.user_policy, ids::DOMAIN_USER)?)?,
        services: resolve_services(domain(doc.service_policy, ids::DOMAIN_SERVICE)?)?,
        files: resolve_files(domain(doc.file_policy, ids::DOMAIN_FILE)?),
        patch: resolve_patch(domain(doc.patch_policy, ids::DOMAIN_PATCH)?)?,
        network: resolve_network(domain(doc.network_policy, ids::DOMAIN_NETWORK)?)?,
        endpoint: resolve_endpoint(domain(doc.endpoint_policy, ids::DOMAIN_ENDPOINT)?)?,
    })
}

fn domain<T>(value: Option<T>, name: &str) -> anyhow::Result<T> {
    value.with_context(|| format!("facts domain missing: {name}"))
}

fn require<T>(value: Option<T>, domain: &str, fact: &str) -> anyhow::Result<T> {
    value.with_context(|| format!("fact missing: {domain}.{fact}"))
}

fn resolve_password(d: PasswordFactsV1) -> anyhow::Result<PasswordFacts> {
    Ok(PasswordFacts {
        password: require(d.password, ids::DOMAIN_PASSWORD, "password")?,
    })
}

fn resolve_firewall(d: FirewallFactsV1) -> anyhow::Result<FirewallFacts> {
    let dom = ids::DOMAIN_FIREWALL;
    Ok(FirewallFacts {
        open_ports: require(d.open_ports, dom, "open_ports")?,
        default_deny: require(d.default_deny, dom, "default_deny")?,
    })
}

fn resolve_logging(d: LoggingFactsV1) -> anyhow::Result<LoggingFacts> {
    let dom = ids::DOMAIN_LOGGING;
    Ok(LoggingFacts {
        auth_failures_enabled: require(d.auth_failures_enabled, dom, "auth_failures_enabled")?,
        log_rotation: require(d.log_rotation, dom, "log_rotation")?,
        syslog_forwarding_enabled: require(
            d.syslog_forwarding_enabled,
            dom,
            "syslog_forwarding_enabled",
        )?,
    })
}

fn resolve_users(d: UserFactsV1) -> anyhow::Result<UserFacts> {
    let dom = ids::DOMAIN_USER;
    Ok(UserFacts {
        inactive_days: require(d.inactive_days, dom, "inactive_days")?,
        admin_users: require(d.admin_users, dom, "admin_users")?,
    })
}

fn resolve_services(d: ServiceFactsV1) -> anyhow::Result<ServiceFacts> {
    let dom = ids::DOMAIN_SERVICE;
    Ok(ServiceFacts {
        running_services: require(d.running_services, dom, "running_services")?,
        open_ports: require(d.open_ports, dom, "open_ports")?,
    })
}

fn resolve_files(d: FileFactsV1) -> FileFacts {
    FileFacts {
        file_permissions: d.file_permissions.unwrap_or_default(),
    }
}

fn resolve_patch(d: PatchFactsV1) -> anyhow::Result<PatchFacts> {
    Ok(PatchFacts {
        pending_updates: require(d.pending_updates, ids::DOMAIN_PATCH, "pending_updates")?,
    })
}

fn resolve_network(d: NetworkFactsV1) -> anyhow::Result<NetworkFacts> {
    let dom = ids::DOMAIN_NETWORK;
    Ok(NetworkFacts {
        ssh_root_login: require(d.ssh_root_login, dom, "ssh_root_login")?,
        tls_version: require(d.tls_version, dom, "tls_version")?,
    })
}

fn resolve_endpoint(d: EndpointFactsV1) -> anyhow::Result<EndpointFacts> {
    let dom = ids::DOMAIN_ENDPOINT;
    Ok(EndpointFacts {
        antivirus_running: require(d.antivirus_running, dom, "antivirus_running")?,
        definitions_up_to_date: require(d.definitions_up_to_date, dom, "definitions_up_to_date")?,
    })
}
