use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `verguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VerguardConfigV1 {
    /// Optional schema string for tooling (`verguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Path to the exception list (one bare filename per line).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exceptions: Option<String>,

    /// Opt-in: map a failed verdict to a nonzero exit status.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on_missing: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_config() {
        let cfg: VerguardConfigV1 = toml::from_str(
            r#"
schema = "verguard.config.v1"
exceptions = "allowlists/known.txt"
fail_on_missing = true
"#,
        )
        .expect("parse config");
        assert_eq!(cfg.exceptions.as_deref(), Some("allowlists/known.txt"));
        assert_eq!(cfg.fail_on_missing, Some(true));
    }

    #[test]
    fn empty_config_is_all_defaults() {
        let cfg: VerguardConfigV1 = toml::from_str("").expect("parse empty config");
        assert_eq!(cfg, VerguardConfigV1::default());
    }

    #[test]
    fn unknown_keys_are_tolerated() {
        let cfg: VerguardConfigV1 = toml::from_str("future_knob = 3\n").expect("parse config");
        assert_eq!(cfg, VerguardConfigV1::default());
    }
}
