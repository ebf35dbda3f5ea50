//! Render use cases: text output and JSON serialization of a report.

use verguard_render::{RenderableReport, RenderableRow, RenderableStats, RenderableVerdict};
use verguard_types::{ReportEnvelope, ReportRow, Verdict};

pub fn to_renderable(report: &ReportEnvelope) -> RenderableReport {
    RenderableReport {
        verdict: match report.verdict {
            Verdict::Pass => RenderableVerdict::Pass,
            Verdict::Fail => RenderableVerdict::Fail,
        },
        rows: report.rows.iter().map(renderable_row).collect(),
        failing: report.failing.iter().map(renderable_row).collect(),
        stats: RenderableStats {
            files_verified: report.data.files_verified,
            files_with_version: report.data.files_with_version,
            files_without_version: report.data.files_without_version,
        },
    }
}

pub fn render_text(report: &RenderableReport) -> String {
    verguard_render::render_text(report)
}

pub fn serialize_report(report: &ReportEnvelope) -> anyhow::Result<String> {
    let mut data = serde_json::to_string_pretty(report)?;
    data.push('\n');
    Ok(data)
}

fn renderable_row(row: &ReportRow) -> RenderableRow {
    RenderableRow {
        path: row.path.as_str().to_string(),
        version: row.version.clone(),
        excepted: row.excepted,
    }
}
