use crate::model::VerguardConfigV1;
use camino::Utf8PathBuf;

/// Exception list colocated with the invocation when nothing names one.
pub const DEFAULT_EXCEPTIONS: &str = "exceptions.txt";

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub exceptions: Option<Utf8PathBuf>,
    pub fail_on_missing: bool,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
}

#[derive(Clone, Debug)]
pub struct EffectiveConfig {
    pub exceptions_path: Utf8PathBuf,
    /// True when the CLI or config named the path. An explicit path that
    /// cannot be read is fatal; the silent default is allowed to be absent.
    pub exceptions_explicit: bool,
    pub fail_on_missing: bool,
}

pub fn resolve_config(cfg: VerguardConfigV1, overrides: Overrides) -> ResolvedConfig {
    let explicit = overrides.exceptions.is_some() || cfg.exceptions.is_some();
    let exceptions_path = overrides
        .exceptions
        .or_else(|| cfg.exceptions.map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_EXCEPTIONS));

    let fail_on_missing = overrides.fail_on_missing || cfg.fail_on_missing.unwrap_or(false);

    ResolvedConfig {
        effective: EffectiveConfig {
            exceptions_path,
            exceptions_explicit: explicit,
            fail_on_missing,
        },
    }
}
