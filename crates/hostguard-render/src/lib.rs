//! Deterministic renderers over a renderable projection of the report.
//!
//! This crate knows nothing about policies or facts; it turns a
//! `RenderableReport` into text. Same input, same bytes out.

#![forbid(unsafe_code)]

mod markdown;
mod model;
mod text;

pub use markdown::render_markdown;
pub use model::{
    domain_label, RenderableData, RenderableDomain, RenderableEntry, RenderableOutcome,
    RenderableReport, RenderableVerdict,
};
pub use text::render_text;
