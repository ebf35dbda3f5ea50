use crate::DisplayPath;
use camino::Utf8PathBuf;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use time::OffsetDateTime;

/// Stable schema identifier for verguard reports.
pub const SCHEMA_REPORT_V1: &str = "verguard.report.v1";

/// Path rendered for the placeholder row when no valid target exists.
pub const PATH_NOT_AVAILABLE: &str = "Not available";

/// Version rendered for the placeholder row. It is a *present* version
/// field: the placeholder never counts as a failing row.
pub const OBJECT_NOT_FOUND: &str = "Object is not found";

/// What a run inspects: one file, one folder tree, or nothing valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScanTarget {
    File(Utf8PathBuf),
    Folder(Utf8PathBuf),
    Missing,
}

impl ScanTarget {
    /// Stable label used in the report data block.
    pub fn kind(&self) -> &'static str {
        match self {
            ScanTarget::File(_) => "file",
            ScanTarget::Folder(_) => "folder",
            ScanTarget::Missing => "missing",
        }
    }
}

/// Version metadata extracted from one binary.
///
/// `None` fields mean the platform facility could not supply that data
/// (missing resource, unreadable file, wrong format). That is an expected
/// outcome, not an error; a partial record is valid.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VersionRecord {
    pub product_version: Option<String>,
    pub file_version: Option<String>,
    /// String-table metadata (CompanyName, FileDescription, ...) from the
    /// first advertised translation pair, when the resource carries one.
    pub strings: Option<BTreeMap<String, String>>,
}

/// One line item of the report: a single scanned file.
///
/// Identity for deduplication is `(path, version, excepted)`; the extra
/// record detail rides along into the JSON artifact only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ReportRow {
    pub path: DisplayPath,
    /// Product version, `None` when the version resource yielded nothing.
    pub version: Option<String>,
    pub excepted: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strings: Option<BTreeMap<String, String>>,
}

impl ReportRow {
    pub fn new(path: DisplayPath, record: VersionRecord, excepted: bool) -> Self {
        Self {
            path,
            version: record.product_version,
            excepted,
            file_version: record.file_version,
            strings: record.strings,
        }
    }

    /// The placeholder row emitted when neither a valid file nor a valid
    /// folder target was supplied, so a report always has at least one row.
    pub fn not_found() -> Self {
        Self {
            path: DisplayPath::new(PATH_NOT_AVAILABLE),
            version: Some(OBJECT_NOT_FOUND.to_string()),
            excepted: false,
            file_version: None,
            strings: None,
        }
    }

    /// A row fails when it has no version data and is not on the
    /// exception list.
    pub fn is_failing(&self) -> bool {
        self.version.is_none() && !self.excepted
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Verguard-specific summary payload for the report.
///
/// Invariant: `files_with_version + files_without_version == files_verified`,
/// including the all-zero case.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanData {
    pub target: String,
    pub exceptions_loaded: u32,

    pub files_verified: u32,
    pub files_with_version: u32,
    pub files_without_version: u32,
    pub files_failing: u32,
}

/// The emitted report envelope.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub verdict: Verdict,
    /// Deduplicated rows in first-seen walk order.
    pub rows: Vec<ReportRow>,
    /// Rows that drove a `fail` verdict, in row order.
    pub failing: Vec<ReportRow>,
    pub data: ScanData,
}
