//! Stable DTOs and IDs used across the hostguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report envelope
//! - stable string IDs for policy domains and sub-check codes

#![forbid(unsafe_code)]

pub mod ids;
pub mod report;

pub use report::{
    Finding, HostguardData, HostguardReport, Outcome, ReportEnvelope, ToolMeta, Verdict,
    SCHEMA_REPORT_V1,
};
