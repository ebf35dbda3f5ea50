use crate::{RenderableReport, RenderableRow, RenderableVerdict};

/// Column width for the path field: padded, over-long paths truncated.
const PATH_WIDTH: usize = 80;
/// Column width for the version field.
const VERSION_WIDTH: usize = 20;

const FLAG_TITLE: &str = "In exceptions";

/// Sentinel printed for an absent version. Detection of absence happens on
/// the typed field; this string is presentation only.
const ABSENT_VERSION: &str = "None";

/// Render the full report: header, deduplicated rows, separator, the
/// statistics block, the verdict, and the failing rows when the verdict is
/// a failure. No trailing newline.
pub fn render_text(report: &RenderableReport) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(report.rows.len() + 8);

    lines.push(format!(
        "{}  {}  {}",
        pad("Path to the file", PATH_WIDTH),
        pad("Product version", VERSION_WIDTH),
        FLAG_TITLE
    ));

    for row in &report.rows {
        lines.push(row_line(row));
    }

    lines.push("=".repeat(PATH_WIDTH + VERSION_WIDTH + FLAG_TITLE.len() + 4));
    lines.push(format!("Files verified: {}", report.stats.files_verified));
    lines.push(format!(
        "Files have product version: {}",
        report.stats.files_with_version
    ));
    lines.push(format!(
        "Files have not product version: {}",
        report.stats.files_without_version
    ));

    match report.verdict {
        RenderableVerdict::Pass => lines.push("Test passed".to_string()),
        RenderableVerdict::Fail => {
            lines.push("Test Failed".to_string());
            lines.push(format!("Files failed: {}", report.failing.len()));
            for row in &report.failing {
                lines.push(row_line(row));
            }
        }
    }

    lines.join("\n")
}

fn row_line(row: &RenderableRow) -> String {
    let version = row.version.as_deref().unwrap_or(ABSENT_VERSION);
    format!(
        "{}  {}  {}",
        pad(&row.path, PATH_WIDTH),
        pad(version, VERSION_WIDTH),
        row.excepted
    )
}

/// Pad to `width`; longer values are cut at the column edge.
fn pad(value: &str, width: usize) -> String {
    let cut: String = value.chars().take(width).collect();
    format!("{cut:<width$}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::RenderableStats;

    fn row(path: &str, version: Option<&str>, excepted: bool) -> RenderableRow {
        RenderableRow {
            path: path.to_string(),
            version: version.map(str::to_string),
            excepted,
        }
    }

    fn pass_report() -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdict::Pass,
            rows: vec![row("C:/Program Files/demo/app.exe", Some("1.2.3.4"), false)],
            failing: Vec::new(),
            stats: RenderableStats {
                files_verified: 1,
                files_with_version: 1,
                files_without_version: 0,
            },
        }
    }

    fn fail_report() -> RenderableReport {
        RenderableReport {
            verdict: RenderableVerdict::Fail,
            rows: vec![
                row("C:/Program Files/demo/app.exe", Some("1.2.3.4"), false),
                row("C:/Program Files/demo/legacy.dll", None, false),
                row("C:/Program Files/demo/vendor.dll", None, true),
            ],
            failing: vec![row("C:/Program Files/demo/legacy.dll", None, false)],
            stats: RenderableStats {
                files_verified: 3,
                files_with_version: 1,
                files_without_version: 2,
            },
        }
    }

    #[test]
    fn pad_truncates_at_the_column_edge() {
        assert_eq!(pad("abc", 5), "abc  ");
        assert_eq!(pad("abcdefgh", 5), "abcde");
        assert_eq!(pad("", 3), "   ");
    }

    #[test]
    fn absent_version_renders_the_sentinel() {
        let line = row_line(&row("x.dll", None, false));
        assert!(line.contains("None"));
        assert!(line.ends_with("false"));
    }

    #[test]
    fn line_order_is_header_rows_stats_verdict() {
        let text = render_text(&pass_report());
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].starts_with("Path to the file"));
        assert!(lines[1].starts_with("C:/Program Files/demo/app.exe"));
        assert!(lines[2].starts_with("===="));
        assert_eq!(lines[3], "Files verified: 1");
        assert_eq!(lines[4], "Files have product version: 1");
        assert_eq!(lines[5], "Files have not product version: 0");
        assert_eq!(lines[6], "Test passed");
        assert_eq!(lines.len(), 7);
    }

    #[test]
    fn failed_verdict_appends_count_and_failing_rows() {
        let text = render_text(&fail_report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[8], "Test Failed");
        assert_eq!(lines[9], "Files failed: 1");
        assert!(lines[10].starts_with("C:/Program Files/demo/legacy.dll"));
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn zero_row_report_renders_without_issue() {
        let report = RenderableReport {
            verdict: RenderableVerdict::Pass,
            rows: Vec::new(),
            failing: Vec::new(),
            stats: RenderableStats::default(),
        };
        let text = render_text(&report);
        assert!(text.contains("Files verified: 0"));
        assert!(text.contains("Test passed"));
    }

    #[test]
    fn snapshot_pass_report() {
        insta::assert_snapshot!(render_text(&pass_report()), @r"
        Path to the file                                                                  Product version       In exceptions
        C:/Program Files/demo/app.exe                                                     1.2.3.4               false
        =====================================================================================================================
        Files verified: 1
        Files have product version: 1
        Files have not product version: 0
        Test passed
        ");
    }

    #[test]
    fn snapshot_fail_report() {
        insta::assert_snapshot!(render_text(&fail_report()), @r"
        Path to the file                                                                  Product version       In exceptions
        C:/Program Files/demo/app.exe                                                     1.2.3.4               false
        C:/Program Files/demo/legacy.dll                                                  None                  false
        C:/Program Files/demo/vendor.dll                                                  None                  true
        =====================================================================================================================
        Files verified: 3
        Files have product version: 1
        Files have not product version: 2
        Test Failed
        Files failed: 1
        C:/Program Files/demo/legacy.dll                                                  None                  false
        ");
    }
}
