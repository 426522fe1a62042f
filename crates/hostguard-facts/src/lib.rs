//! Observed-facts document parsing.
//!
//! A real deployment would have a collector probing the host; this crate is
//! the seam where such a collector plugs in. Today facts arrive as a JSON
//! document mirroring the policy shape (same top-level `*_policy` keys, one
//! object per domain), are resolved fail-closed into the domain's
//! `HostFacts`, and are discarded after the run. IO-free: parses strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;
mod starter;

pub use model::{
    EndpointFactsV1, FactsDocumentV1, FileFactsV1, FirewallFactsV1, LoggingFactsV1,
    NetworkFactsV1, PasswordFactsV1, PatchFactsV1, ServiceFactsV1, UserFactsV1,
};
pub use starter::starter_facts_json;

use hostguard_domain::model::HostFacts;

/// Parse a facts document into the permissive typed model.
pub fn parse_facts_json(input: &str) -> anyhow::Result<FactsDocumentV1> {
    let doc: FactsDocumentV1 = serde_json::from_str(input)?;
    Ok(doc)
}

/// Resolve the parsed document into `HostFacts`, failing closed on any
/// missing domain or required fact.
pub fn resolve_facts(doc: FactsDocumentV1) -> anyhow::Result<HostFacts> {
    resolve::resolve_facts(doc)
}

/// Parse and resolve in one step.
pub fn load_facts(input: &str) -> anyhow::Result<HostFacts> {
    resolve_facts(parse_facts_json(input)?)
}
