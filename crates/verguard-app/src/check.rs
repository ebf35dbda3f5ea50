//! The `scan` use case: resolve settings, walk the target, evaluate, and
//! stamp the report envelope.

use anyhow::Context;
use camino::Utf8Path;
use time::OffsetDateTime;
use verguard_domain::ScanContext;
use verguard_settings::{Overrides, ResolvedConfig, VerguardConfigV1};
use verguard_types::{ExceptionSet, ReportEnvelope, ToolMeta, Verdict, SCHEMA_REPORT_V1};

/// Input for the scan use case.
#[derive(Clone, Debug)]
pub struct ScanInput<'a> {
    /// Single-file target, if given.
    pub file: Option<&'a Utf8Path>,
    /// Folder target, if given. Mutually exclusive with `file` at the CLI.
    pub folder: Option<&'a Utf8Path>,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
}

/// Output from the scan use case.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    /// The generated report.
    pub report: ReportEnvelope,
    /// The resolved configuration used.
    pub resolved: ResolvedConfig,
    /// Startup notes for standard error (never part of the report).
    pub notes: Vec<String>,
}

/// Run the scan use case: parse config, load exceptions, scan the target,
/// evaluate the rows, and produce the report envelope.
pub fn run_scan(input: ScanInput<'_>) -> anyhow::Result<ScanOutput> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        VerguardConfigV1::default()
    } else {
        verguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };

    let resolved = verguard_settings::resolve_config(cfg, input.overrides.clone());
    let effective = &resolved.effective;

    // An explicitly named exception list must load; the silent default may
    // be absent, in which case the set is empty and the run says so.
    let mut notes = Vec::new();
    let exceptions = if effective.exceptions_explicit || effective.exceptions_path.exists() {
        verguard_settings::load_exceptions(&effective.exceptions_path)
            .context("load exception list")?
    } else {
        notes.push(format!(
            "verguard: no exception list at {}; continuing with an empty set",
            effective.exceptions_path
        ));
        ExceptionSet::default()
    };

    let target = verguard_scan::resolve_target(input.file, input.folder);
    let rows = verguard_scan::scan(&target, &exceptions);

    let ctx = ScanContext {
        target: target.kind().to_string(),
        exceptions_loaded: exceptions.len() as u32,
    };
    let domain = verguard_domain::evaluate(rows, &ctx);

    let finished_at = OffsetDateTime::now_utc();

    let report = ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "verguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        verdict: domain.verdict,
        rows: domain.rows,
        failing: domain.failing,
        data: domain.data,
    };

    Ok(ScanOutput {
        report,
        resolved,
        notes,
    })
}

/// Map verdict to exit code. A failed verdict stays at 0 unless the
/// caller opted into `fail_on_missing`; argument and startup errors use
/// other codes entirely.
pub fn verdict_exit_code(verdict: Verdict, fail_on_missing: bool) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail if fail_on_missing => 2,
        Verdict::Fail => 0,
    }
}
