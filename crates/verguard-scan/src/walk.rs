use crate::classify::is_in_scope;
use crate::metadata::extract;
use camino::{Utf8Path, Utf8PathBuf};
use rayon::prelude::*;
use verguard_types::{DisplayPath, ExceptionSet, ReportRow, ScanTarget};
use walkdir::WalkDir;

/// Resolve the startup target from the mutually exclusive CLI inputs.
///
/// A `--file` that is not a file (or `--folder` that is not a directory)
/// falls through; with nothing valid left the target is `Missing`.
pub fn resolve_target(file: Option<&Utf8Path>, folder: Option<&Utf8Path>) -> ScanTarget {
    if let Some(path) = file {
        if path.is_file() {
            return ScanTarget::File(path.to_path_buf());
        }
    }
    if let Some(path) = folder {
        if path.is_dir() {
            return ScanTarget::Folder(path.to_path_buf());
        }
    }
    ScanTarget::Missing
}

/// Produce the report rows for a target, in deterministic walk order.
///
/// Extraction runs as an indexed fan-out across the collected file list;
/// the resulting rows keep the walk order, so the sequence handed to the
/// evaluator is reproducible run to run.
pub fn scan(target: &ScanTarget, exceptions: &ExceptionSet) -> Vec<ReportRow> {
    match target {
        ScanTarget::File(path) => {
            if is_in_scope(path) {
                vec![build_row(path, exceptions)]
            } else {
                Vec::new()
            }
        }
        ScanTarget::Folder(root) => {
            let files = collect_in_scope(root);
            files
                .par_iter()
                .map(|path| build_row(path, exceptions))
                .collect()
        }
        ScanTarget::Missing => vec![ReportRow::not_found()],
    }
}

/// All in-scope files under `root`, depth first with sorted entries.
///
/// Directory symlinks are not followed, so a symlink cycle cannot recurse.
/// Unreadable entries and non-UTF-8 paths are skipped.
fn collect_in_scope(root: &Utf8Path) -> Vec<Utf8PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter_map(|e| Utf8PathBuf::from_path_buf(e.path().to_path_buf()).ok())
        .filter(|p| is_in_scope(p))
        .collect()
}

fn build_row(path: &Utf8Path, exceptions: &ExceptionSet) -> ReportRow {
    let record = extract(path);
    let display = DisplayPath::from(path);
    let excepted = exceptions.contains(display.file_name());
    ReportRow::new(display, record, excepted)
}
