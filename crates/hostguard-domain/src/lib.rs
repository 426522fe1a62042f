//! Pure policy evaluation (no IO).
//!
//! Input: observed host facts and a resolved policy document, both
//! constructed elsewhere.
//! Output: typed per-domain reports + verdict + summary data.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;
pub mod version;

pub mod checks;
mod engine;

pub use engine::{evaluate, findings};

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;
