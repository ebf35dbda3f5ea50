use sha2::{Digest, Sha256};
use verguard_types::ReportRow;

/// Compute a stable SHA-256 fingerprint for a report row.
///
/// Identity fields:
/// - path (normalized display form)
/// - excepted flag
/// - version (if present)
///
/// Two rows are duplicates exactly when their fingerprints match.
pub fn fingerprint_for_row(row: &ReportRow) -> String {
    let excepted = if row.excepted { "1" } else { "0" };
    let mut parts = vec![row.path.as_str(), excepted];
    if let Some(v) = row.version.as_deref() {
        parts.push(v);
    }
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
