use verguard_types::{ReportRow, ScanData, Verdict};

#[derive(Clone, Debug, Default)]
pub struct VersionCounts {
    pub with_version: u32,
    pub without_version: u32,
}

impl VersionCounts {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let mut counts = VersionCounts::default();
        for row in rows {
            if row.version.is_some() {
                counts.with_version += 1;
            } else {
                counts.without_version += 1;
            }
        }
        counts
    }
}

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Verdict,
    /// Deduplicated rows in first-seen order.
    pub rows: Vec<ReportRow>,
    /// Failing rows, in row order.
    pub failing: Vec<ReportRow>,
    pub data: ScanData,
}
