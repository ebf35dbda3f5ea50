//! Config parsing and override resolution.
//!
//! Parsing and resolution are IO-free; the one read this crate performs is
//! the exception list itself, which is also the one fatal startup error in
//! the system.

#![forbid(unsafe_code)]

mod exceptions;
mod model;
mod resolve;

pub use exceptions::{load_exceptions, ConfigError};
pub use model::VerguardConfigV1;
pub use resolve::{resolve_config, EffectiveConfig, Overrides, ResolvedConfig, DEFAULT_EXCEPTIONS};

/// Parse `verguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<VerguardConfigV1> {
    let cfg: VerguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
