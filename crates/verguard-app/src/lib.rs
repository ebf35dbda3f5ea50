//! Use case orchestration for verguard.
//!
//! This crate provides the application layer: it coordinates the settings,
//! scan, domain, and render layers. It is intentionally thin and delegates
//! heavy lifting to the appropriate layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod check;
mod render;

pub use check::{run_scan, verdict_exit_code, ScanInput, ScanOutput};
pub use render::{render_text, serialize_report, to_renderable};
