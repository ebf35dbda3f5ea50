use crate::fingerprint::fingerprint_for_row;
use crate::report::{DomainReport, VersionCounts};
use std::collections::HashSet;
use verguard_types::{ReportRow, ScanData, Verdict};

/// Run-level facts the engine cannot derive from the rows themselves.
#[derive(Clone, Debug)]
pub struct ScanContext {
    /// Stable target label: `file`, `folder`, or `missing`.
    pub target: String,
    pub exceptions_loaded: u32,
}

pub fn evaluate(rows: Vec<ReportRow>, ctx: &ScanContext) -> DomainReport {
    let rows = dedup_rows(rows);

    let counts = VersionCounts::from_rows(&rows);
    let failing: Vec<ReportRow> = rows.iter().filter(|r| r.is_failing()).cloned().collect();

    let verdict = if failing.is_empty() {
        Verdict::Pass
    } else {
        Verdict::Fail
    };

    let data = ScanData {
        target: ctx.target.clone(),
        exceptions_loaded: ctx.exceptions_loaded,
        files_verified: rows.len() as u32,
        files_with_version: counts.with_version,
        files_without_version: counts.without_version,
        files_failing: failing.len() as u32,
    };

    DomainReport {
        verdict,
        rows,
        failing,
        data,
    }
}

/// Drop rows whose structural content was already seen, preserving
/// first-occurrence order. Idempotent.
pub fn dedup_rows(rows: Vec<ReportRow>) -> Vec<ReportRow> {
    let mut seen: HashSet<String> = HashSet::with_capacity(rows.len());
    let mut out: Vec<ReportRow> = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert(fingerprint_for_row(&row)) {
            out.push(row);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use verguard_types::{DisplayPath, VersionRecord};

    fn row(path: &str, version: Option<&str>, excepted: bool) -> ReportRow {
        ReportRow::new(
            DisplayPath::new(path),
            VersionRecord {
                product_version: version.map(str::to_string),
                ..VersionRecord::default()
            },
            excepted,
        )
    }

    fn ctx() -> ScanContext {
        ScanContext {
            target: "folder".to_string(),
            exceptions_loaded: 0,
        }
    }

    #[test]
    fn versioned_rows_pass() {
        let report = evaluate(vec![row("a/app.exe", Some("1.2.3.4"), false)], &ctx());
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.files_verified, 1);
        assert_eq!(report.data.files_with_version, 1);
        assert_eq!(report.data.files_without_version, 0);
        assert!(report.failing.is_empty());
    }

    #[test]
    fn absent_version_fails_unless_excepted() {
        let report = evaluate(
            vec![
                row("a/bad.dll", None, false),
                row("a/known.dll", None, true),
            ],
            &ctx(),
        );
        assert_eq!(report.verdict, Verdict::Fail);
        assert_eq!(report.data.files_failing, 1);
        assert_eq!(report.failing.len(), 1);
        assert_eq!(report.failing[0].path.as_str(), "a/bad.dll");
    }

    #[test]
    fn all_excepted_rows_pass() {
        let report = evaluate(vec![row("a/known.dll", None, true)], &ctx());
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.files_without_version, 1);
    }

    #[test]
    fn empty_row_sequence_yields_zero_stats() {
        let report = evaluate(Vec::new(), &ctx());
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.files_verified, 0);
        assert_eq!(report.data.files_with_version, 0);
        assert_eq!(report.data.files_without_version, 0);
    }

    #[test]
    fn placeholder_row_counts_as_with_version() {
        let report = evaluate(vec![ReportRow::not_found()], &ctx());
        assert_eq!(report.verdict, Verdict::Pass);
        assert_eq!(report.data.files_verified, 1);
        assert_eq!(report.data.files_with_version, 1);
    }

    #[test]
    fn duplicate_triples_collapse_to_first_occurrence() {
        let report = evaluate(
            vec![
                row("a/app.exe", Some("1.0.0.0"), false),
                row("a/other.exe", Some("2.0.0.0"), false),
                row("a/app.exe", Some("1.0.0.0"), false),
            ],
            &ctx(),
        );
        let paths: Vec<&str> = report.rows.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["a/app.exe", "a/other.exe"]);
        assert_eq!(report.data.files_verified, 2);
    }

    #[test]
    fn same_path_different_version_is_not_a_duplicate() {
        let report = evaluate(
            vec![
                row("a/app.exe", Some("1.0.0.0"), false),
                row("a/app.exe", Some("2.0.0.0"), false),
            ],
            &ctx(),
        );
        assert_eq!(report.rows.len(), 2);
    }

    #[test]
    fn dedup_is_idempotent() {
        let rows = vec![
            row("a/app.exe", Some("1.0.0.0"), false),
            row("a/app.exe", Some("1.0.0.0"), false),
            row("b/lib.dll", None, true),
        ];
        let once = dedup_rows(rows);
        let twice = dedup_rows(once.clone());
        assert_eq!(once, twice);
    }
}
