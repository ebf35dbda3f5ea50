use crate::platform::{FixedVersions, VersionInfoBlock};
use camino::Utf8Path;
use std::collections::BTreeMap;
use verguard_types::VersionRecord;

/// String-table entries fetched when the resource advertises a translation.
pub const STRING_KEYS: [&str; 12] = [
    "Comments",
    "InternalName",
    "ProductName",
    "CompanyName",
    "LegalCopyright",
    "ProductVersion",
    "FileDescription",
    "LegalTrademarks",
    "PrivateBuild",
    "FileVersion",
    "OriginalFilename",
    "SpecialBuild",
];

/// Extract the version record of one file.
///
/// Never fails: a missing file, a file without a version resource, or a
/// facility error all yield an all-`None` record. A record with numeric
/// versions but no strings (or the reverse) is valid.
pub fn extract(path: &Utf8Path) -> VersionRecord {
    let Some(block) = VersionInfoBlock::open(path) else {
        return VersionRecord::default();
    };

    let mut record = VersionRecord::default();

    if let Some(fixed) = block.fixed() {
        let (product, file) = versions_from_fixed(fixed);
        record.product_version = Some(product);
        record.file_version = Some(file);
    }

    // String metadata needs an advertised (language, codepage) pair; the
    // numeric fields above stand on their own when none exists.
    if let Some(translation) = block.translations().first().copied() {
        let mut strings = BTreeMap::new();
        for key in STRING_KEYS {
            if let Some(value) = block.string_value(translation, key) {
                strings.insert(key.to_string(), value);
            }
        }
        if !strings.is_empty() {
            record.strings = Some(strings);
        }
    }

    record
}

/// Dotted 4-part strings for (product, file) from the fixed-info halves.
fn versions_from_fixed(fixed: FixedVersions) -> (String, String) {
    (
        format_version_pair(fixed.product_ms, fixed.product_ls),
        format_version_pair(fixed.file_ms, fixed.file_ls),
    )
}

/// Split each 32-bit half into its two 16-bit components.
fn format_version_pair(ms: u32, ls: u32) -> String {
    format!("{}.{}.{}.{}", ms / 65536, ms % 65536, ls / 65536, ls % 65536)
}
