//! Policy document parsing and fail-closed resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves the policy
//! document provided as a string. The document shape (top-level `*_policy`
//! keys) is the stable external format; the parse model is permissive so
//! that "not JSON" and "missing required setting" stay distinguishable
//! errors, both raised before any check executes.

#![forbid(unsafe_code)]

mod model;
mod resolve;
mod starter;

pub use model::{
    EndpointPolicyV1, FilePolicyV1, FirewallPolicyV1, LoggingPolicyV1, NetworkPolicyV1,
    PasswordPolicyV1, PatchPolicyV1, PolicyDocumentV1, ServicePolicyV1, UserPolicyV1,
};
pub use starter::starter_policy_json;

use hostguard_domain::policy::PolicyDocument;

/// Parse `policies.json` (or equivalent) into the permissive typed model.
pub fn parse_policy_json(input: &str) -> anyhow::Result<PolicyDocumentV1> {
    let doc: PolicyDocumentV1 = serde_json::from_str(input)?;
    Ok(doc)
}

/// Resolve the parsed document into the typed policy the engine consumes,
/// failing closed on any missing domain or required setting.
pub fn resolve_policy(doc: PolicyDocumentV1) -> anyhow::Result<PolicyDocument> {
    resolve::resolve_policy(doc)
}

/// Parse and resolve in one step.
pub fn load_policy(input: &str) -> anyhow::Result<PolicyDocument> {
    resolve_policy(parse_policy_json(input)?)
}
