//! Stable DTOs used across the verguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report (rows, statistics, verdict, envelope)
//! - the canonical display-path newtype used in rows and exceptions
//! - the exception set the scanner cross-references

#![forbid(unsafe_code)]

pub mod exceptions;
pub mod path;
pub mod report;

pub use exceptions::ExceptionSet;
pub use path::DisplayPath;
pub use report::{
    ReportEnvelope, ReportRow, ScanData, ScanTarget, ToolMeta, Verdict, VersionRecord,
    SCHEMA_REPORT_V1,
};
