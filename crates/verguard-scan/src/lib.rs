//! Filesystem adapters for verguard.
//!
//! This crate owns everything that touches the outside world during a scan:
//! target resolution, the recursive walk, extension classification, and
//! version-resource extraction through the platform facility.

pub mod classify;
pub mod metadata;
pub mod platform;
pub mod walk;

pub use classify::{is_in_scope, CHECKED_EXTENSIONS};
pub use metadata::extract;
pub use walk::{resolve_target, scan};
