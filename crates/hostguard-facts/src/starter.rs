/// Starter facts template written by `hostguard init`.
///
/// Deliberately a non-compliant host (open 8080, rotation off, stale AV
/// definitions, root login on, TLS 1.0) so a first run demonstrates failing
/// checks and the non-zero exit status.
pub fn starter_facts_json() -> &'static str {
    r#"{
  "password_policy": {
    "password": "MySecurePass123!"
  },
  "firewall_policy": {
    "open_ports": [22, 443, 8080],
    "default_deny": true
  },
  "logging_policy": {
    "auth_failures_enabled": true,
    "log_rotation": false,
    "syslog_forwarding_enabled": true
  },
  "user_policy": {
    "inactive_days": 120,
    "admin_users": 3
  },
  "service_policy": {
    "running_services": ["ssh", "ftp", "cron"],
    "open_ports": [22, 443, 8080]
  },
  "file_policy": {
    "file_permissions": {
      "/etc/passwd": "644",
      "/etc/shadow": "640"
    }
  },
  "patch_policy": {
    "pending_updates": 6
  },
  "network_policy": {
    "ssh_root_login": true,
    "tls_version": "1.0"
  },
  "endpoint_policy": {
    "antivirus_running": true,
    "definitions_up_to_date": false
  }
}
"#
}
