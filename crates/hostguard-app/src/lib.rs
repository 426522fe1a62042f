//! Use case orchestration for hostguard.
//!
//! This crate provides the application layer: it coordinates the policy,
//! facts, domain, and render layers. It is intentionally thin; the CLI
//! crate depends on this and only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{run_check, verdict_exit_code, CheckInput, CheckOutput};
pub use render::{runtime_error_report, serialize_report, to_renderable};
