//! CLI entry point for verguard.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and exit codes.
//! All business logic lives in the `verguard-app` crate.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use verguard_app::{
    render_text, run_scan, serialize_report, to_renderable, verdict_exit_code, ScanInput,
};
use verguard_settings::Overrides;
use verguard_types::ReportEnvelope;

#[derive(Parser, Debug)]
#[command(
    name = "verguard",
    version,
    about = "Check embedded version resources across a Windows binary tree"
)]
struct Cli {
    /// Path to a single file to check.
    #[arg(short, long, value_name = "FILE", conflicts_with = "folder")]
    file: Option<Utf8PathBuf>,

    /// Folder whose contents are checked recursively.
    #[arg(short = 'd', long, value_name = "FOLDER")]
    folder: Option<Utf8PathBuf>,

    /// Path to the exception list (one bare filename per line).
    #[arg(long, value_name = "PATH")]
    exceptions: Option<Utf8PathBuf>,

    /// Path to verguard config TOML.
    #[arg(long, default_value = "verguard.toml")]
    config: Utf8PathBuf,

    /// Where to write the JSON report artifact, if anywhere.
    #[arg(long, value_name = "PATH")]
    report_out: Option<Utf8PathBuf>,

    /// Exit with a nonzero status when the verdict is a failure.
    #[arg(long)]
    fail_on_missing: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let result = (|| -> anyhow::Result<i32> {
        // Load config if present; missing file is allowed (defaults apply).
        let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();

        let overrides = Overrides {
            exceptions: cli.exceptions.clone(),
            fail_on_missing: cli.fail_on_missing,
        };

        let output = run_scan(ScanInput {
            file: cli.file.as_deref(),
            folder: cli.folder.as_deref(),
            config_text: &cfg_text,
            overrides,
        })?;

        for note in &output.notes {
            eprintln!("{note}");
        }

        let renderable = to_renderable(&output.report);
        println!("{}", render_text(&renderable));

        if let Some(report_out) = &cli.report_out {
            write_report_file(report_out, &output.report).context("write report json")?;
        }

        Ok(verdict_exit_code(
            output.report.verdict,
            output.resolved.effective.fail_on_missing,
        ))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            eprintln!("verguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_report_file(path: &Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory: {}", parent))?;
        }
    }
    let data = serialize_report(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {}", path))?;
    Ok(())
}
