//! Whole-comparison driver: read, parse, align, stream annotated rows.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process::ExitCode;

use crate::diff::align;
use crate::report::ComparisonReport;
use crate::sequence::NumericSequence;

/// Overall status of one invocation.
///
/// The numeric values are the process exit codes. Code 1 is shared with
/// the binary's usage-error path, so observed alone it is ambiguous
/// between "arguments malformed" and "some row mismatched".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    /// Every aligned row matched (including the zero-row case).
    AllMatched = 0,
    /// At least one row mismatched.
    MismatchFound = 1,
    /// One or both inputs failed to parse; no rows were emitted.
    Aborted = 2,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}

/// Compare two files of newline-separated floats, writing annotated rows
/// to `out`.
///
/// Both files are read fully before any comparison. If either fails to
/// parse, exactly the line `(aborted)` is written and the result is
/// [`ExitStatus::Aborted`], with no row output at all. I/O errors (opening,
/// reading, writing) propagate to the caller untouched; they are never
/// folded into a comparison verdict.
pub fn compare_files(
    actual_path: &Path,
    expected_path: &Path,
    out: &mut impl Write,
) -> io::Result<ExitStatus> {
    let actual_text = fs::read_to_string(actual_path)?;
    let expected_text = fs::read_to_string(expected_path)?;

    let (actual, expected) = match (
        NumericSequence::parse(&actual_text),
        NumericSequence::parse(&expected_text),
    ) {
        (Ok(actual), Ok(expected)) => (actual, expected),
        (Err(err), _) | (_, Err(err)) => {
            log::debug!("parse failed: {}", err);
            writeln!(out, "(aborted)")?;
            return Ok(ExitStatus::Aborted);
        }
    };

    log::debug!(
        "parsed {} actual and {} expected values",
        actual.len(),
        expected.len()
    );

    let mut report = ComparisonReport::new();
    for row in align(&actual, &expected) {
        report.add_row(row.classify());
        writeln!(out, "{}", row)?;
    }

    log::debug!(
        "compared {} rows: {} matched, {} mismatched",
        report.total_rows,
        report.match_count,
        report.mismatch_count
    );

    Ok(report.exit_status())
}
