use camino::{Utf8Path, Utf8PathBuf};
use verguard_types::ExceptionSet;

/// The one fatal startup error: the exception list could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read exception list {path}")]
    ExceptionList {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load the exception list: one bare filename per line, surrounding
/// whitespace stripped, blank lines tolerated, duplicates collapsed.
pub fn load_exceptions(path: &Utf8Path) -> Result<ExceptionSet, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ExceptionList {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
