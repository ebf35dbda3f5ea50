//! Property-based tests for the domain crate.
//!
//! These tests use proptest to verify invariants around:
//! - Deduplication idempotence and order preservation
//! - The statistics invariant (with + without == total)
//! - The failing-row rule and verdict derivation

use crate::engine::{dedup_rows, evaluate, ScanContext};
use proptest::prelude::*;
use verguard_types::{DisplayPath, ReportRow, Verdict, VersionRecord};

/// Strategy for display paths drawn from a small alphabet so that
/// duplicate rows actually occur in generated sequences.
fn arb_path() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-d]/[a-d]{1,4}\\.(exe|dll|pyd)").unwrap()
}

/// Strategy for version fields: absent, or a dotted 4-part string.
fn arb_version() -> impl Strategy<Value = Option<String>> {
    prop::option::of(
        (0u16..4, 0u16..4, 0u16..4, 0u16..4)
            .prop_map(|(a, b, c, d)| format!("{}.{}.{}.{}", a, b, c, d)),
    )
}

fn arb_row() -> impl Strategy<Value = ReportRow> {
    (arb_path(), arb_version(), any::<bool>()).prop_map(|(path, version, excepted)| {
        ReportRow::new(
            DisplayPath::new(path),
            VersionRecord {
                product_version: version,
                ..VersionRecord::default()
            },
            excepted,
        )
    })
}

fn ctx() -> ScanContext {
    ScanContext {
        target: "folder".to_string(),
        exceptions_loaded: 0,
    }
}

proptest! {
    /// Running dedup on its own output changes nothing.
    #[test]
    fn dedup_is_idempotent(rows in prop::collection::vec(arb_row(), 0..40)) {
        let once = dedup_rows(rows);
        let twice = dedup_rows(once.clone());
        prop_assert_eq!(once, twice);
    }

    /// Dedup keeps the first occurrence of each triple and never reorders.
    #[test]
    fn dedup_preserves_first_seen_order(rows in prop::collection::vec(arb_row(), 0..40)) {
        let deduped = dedup_rows(rows.clone());

        // Every surviving row appears in the input, and its first input
        // occurrence index is strictly increasing across the output.
        let mut last_index = None;
        for row in &deduped {
            let index = rows.iter().position(|r| {
                r.path == row.path && r.version == row.version && r.excepted == row.excepted
            });
            prop_assert!(index.is_some());
            if let Some(prev) = last_index {
                prop_assert!(index.unwrap() > prev);
            }
            last_index = index;
        }
    }

    /// with + without == total for every evaluated report.
    #[test]
    fn statistics_invariant_holds(rows in prop::collection::vec(arb_row(), 0..40)) {
        let report = evaluate(rows, &ctx());
        prop_assert_eq!(
            report.data.files_with_version + report.data.files_without_version,
            report.data.files_verified
        );
        prop_assert_eq!(report.data.files_verified as usize, report.rows.len());
    }

    /// A row is failing iff its version is absent and it is not excepted,
    /// and the verdict is Fail iff at least one such row survives dedup.
    #[test]
    fn verdict_matches_failing_rows(rows in prop::collection::vec(arb_row(), 0..40)) {
        let report = evaluate(rows, &ctx());

        for row in &report.failing {
            prop_assert!(row.version.is_none());
            prop_assert!(!row.excepted);
        }

        let expected_failing = report
            .rows
            .iter()
            .filter(|r| r.version.is_none() && !r.excepted)
            .count();
        prop_assert_eq!(report.failing.len(), expected_failing);
        prop_assert_eq!(report.data.files_failing as usize, expected_failing);

        let expected_verdict = if expected_failing > 0 { Verdict::Fail } else { Verdict::Pass };
        prop_assert_eq!(report.verdict, expected_verdict);
    }
}
