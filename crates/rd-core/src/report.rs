//! Comparison reporting: aggregates per-row verdicts into counts and an
//! overall exit status.

use serde::{Deserialize, Serialize};

use crate::compare::ExitStatus;
use crate::diff::Verdict;

/// Running aggregate of one comparison pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Total rows compared.
    pub total_rows: u64,
    pub match_count: u64,
    pub mismatch_count: u64,
    /// 0-based index of the first mismatching row (None = all matched).
    pub first_mismatch_row: Option<u64>,
}

impl ComparisonReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one row, in positional order.
    pub fn add_row(&mut self, verdict: Verdict) {
        let index = self.total_rows;
        self.total_rows += 1;

        match verdict {
            Verdict::Match => self.match_count += 1,
            Verdict::Mismatch => {
                self.mismatch_count += 1;
                if self.first_mismatch_row.is_none() {
                    self.first_mismatch_row = Some(index);
                }
            }
        }
    }

    /// True if no row mismatched.
    pub fn passed(&self) -> bool {
        self.mismatch_count == 0
    }

    /// Overall status for a comparison that ran to completion.
    pub fn exit_status(&self) -> ExitStatus {
        if self.passed() {
            ExitStatus::AllMatched
        } else {
            ExitStatus::MismatchFound
        }
    }

    /// Serialize to JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_passes() {
        let report = ComparisonReport::new();
        assert!(report.passed());
        assert_eq!(report.exit_status(), ExitStatus::AllMatched);
        assert_eq!(report.total_rows, 0);
    }

    #[test]
    fn test_counts_and_first_mismatch() {
        let mut report = ComparisonReport::new();
        report.add_row(Verdict::Match);
        report.add_row(Verdict::Mismatch);
        report.add_row(Verdict::Match);
        report.add_row(Verdict::Mismatch);

        assert_eq!(report.total_rows, 4);
        assert_eq!(report.match_count, 2);
        assert_eq!(report.mismatch_count, 2);
        assert_eq!(report.first_mismatch_row, Some(1));
        assert!(!report.passed());
        assert_eq!(report.exit_status(), ExitStatus::MismatchFound);
    }

    #[test]
    fn test_all_match_passes() {
        let mut report = ComparisonReport::new();
        report.add_row(Verdict::Match);
        report.add_row(Verdict::Match);
        assert!(report.passed());
        assert_eq!(report.first_mismatch_row, None);
    }

    #[test]
    fn test_json_round_trip() {
        let mut report = ComparisonReport::new();
        report.add_row(Verdict::Match);
        report.add_row(Verdict::Mismatch);

        let json = report.to_json();
        let back: ComparisonReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back.total_rows, 2);
        assert_eq!(back.mismatch_count, 1);
        assert_eq!(back.first_mismatch_row, Some(1));
    }
}
