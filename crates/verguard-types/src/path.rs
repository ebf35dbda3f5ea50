use camino::{Utf8Path, Utf8PathBuf};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical display path used in report rows.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
/// - never empty (an empty input becomes `.`)
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct DisplayPath(String);

impl DisplayPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        if v.is_empty() {
            v = ".".to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }

    /// The bare filename: everything after the final separator.
    pub fn file_name(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((_, name)) => name,
            None => &self.0,
        }
    }

    /// The extension after the final `.` of the bare filename, case-sensitive.
    ///
    /// A filename with no dot has no extension.
    pub fn extension(&self) -> Option<&str> {
        let name = self.file_name();
        match name.rsplit_once('.') {
            Some((_, ext)) => Some(ext),
            None => None,
        }
    }
}

impl From<&Utf8Path> for DisplayPath {
    fn from(value: &Utf8Path) -> Self {
        DisplayPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for DisplayPath {
    fn from(value: Utf8PathBuf) -> Self {
        DisplayPath::new(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_backslashes_and_dot_prefix() {
        assert_eq!(
            DisplayPath::new(r"bin\tools\app.exe").as_str(),
            "bin/tools/app.exe"
        );
        assert_eq!(DisplayPath::new("./bin/app.dll").as_str(), "bin/app.dll");
        assert_eq!(DisplayPath::new("").as_str(), ".");
    }

    #[test]
    fn file_name_is_after_final_separator() {
        assert_eq!(DisplayPath::new("C:/bin/app.exe").file_name(), "app.exe");
        assert_eq!(DisplayPath::new(r"C:\bin\app.exe").file_name(), "app.exe");
        assert_eq!(DisplayPath::new("app.exe").file_name(), "app.exe");
    }

    #[test]
    fn extension_is_after_final_dot() {
        assert_eq!(DisplayPath::new("a/b/lib.so.1").extension(), Some("1"));
        assert_eq!(DisplayPath::new("a/b/module.pyd").extension(), Some("pyd"));
        assert_eq!(DisplayPath::new("a/b/README").extension(), None);
        assert_eq!(DisplayPath::new("a/b/trailing.").extension(), Some(""));
    }

    #[test]
    fn extension_is_case_sensitive() {
        assert_eq!(DisplayPath::new("setup.EXE").extension(), Some("EXE"));
    }
}
