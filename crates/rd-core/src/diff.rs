//! Positional alignment and rounded-equality classification.
//!
//! Two sequences of possibly different lengths are aligned index by
//! index; each resulting row is classified as matching or mismatching
//! under 6-decimal rounding.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::sequence::NumericSequence;

/// Number of decimal digits both sides are rounded to before comparison.
pub const ROUND_DECIMALS: u32 = 6;

const ROUND_SCALE: f64 = 1e6;

/// Verdict for a single aligned row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    Match,
    Mismatch,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Match => write!(f, "MATCH"),
            Verdict::Mismatch => write!(f, "MISMATCH"),
        }
    }
}

/// One positionally aligned pair.
///
/// `None` marks a missing element where one sequence is shorter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub actual: Option<f64>,
    pub expected: Option<f64>,
}

impl ComparisonRow {
    /// A row matches iff both sides are present and equal after rounding
    /// to 6 decimal digits. An absent side, or NaN on either side,
    /// mismatches.
    pub fn classify(&self) -> Verdict {
        match (self.actual, self.expected) {
            (Some(a), Some(e)) if round6(a) == round6(e) => Verdict::Match,
            _ => Verdict::Mismatch,
        }
    }
}

/// Renders `"<actual>\t<expected>"`, with the raw parsed values at full
/// default precision (never the rounded ones) and absent sides as `None`.
/// Mismatching rows get a trailing `\t<----` marker.
impl fmt::Display for ComparisonRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_side(f, self.actual)?;
        write!(f, "\t")?;
        fmt_side(f, self.expected)?;
        if self.classify() == Verdict::Mismatch {
            write!(f, "\t<----")?;
        }
        Ok(())
    }
}

fn fmt_side(f: &mut fmt::Formatter<'_>, side: Option<f64>) -> fmt::Result {
    match side {
        Some(value) => write!(f, "{}", value),
        None => write!(f, "None"),
    }
}

/// Round to 6 decimal digits with the platform's standard rounding.
/// Non-finite values pass through unchanged.
pub fn round6(x: f64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    (x * ROUND_SCALE).round() / ROUND_SCALE
}

/// Align two sequences index by index.
///
/// Produces `max(len(a), len(b))` rows in positional order; the shorter
/// side is padded with `None`.
pub fn align(actual: &NumericSequence, expected: &NumericSequence) -> Vec<ComparisonRow> {
    let rows = actual.len().max(expected.len());
    (0..rows)
        .map(|i| ComparisonRow {
            actual: actual.get(i),
            expected: expected.get(i),
        })
        .collect()
}
