//! Parsing newline-separated floating-point input.
//!
//! One input source yields one `NumericSequence`. A single unparseable
//! line fails the whole source; there is no partial result.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Whole-input parse failure: some line was not a floating-point number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {token:?} is not a floating-point number")]
pub struct ParseError {
    /// 1-based line number of the offending token.
    pub line: usize,
    /// The raw line that failed conversion.
    pub token: String,
}

/// An ordered sequence of floats parsed from one input source.
///
/// Constructed once per run and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericSequence {
    values: Vec<f64>,
}

impl NumericSequence {
    /// Parse full text into a sequence.
    ///
    /// Splits on `'\n'` and drops empty lines; every remaining line must
    /// convert to `f64` (surrounding whitespace is tolerated, so CRLF
    /// input and padded tokens parse). Any conversion failure fails the
    /// whole parse.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut values = Vec::new();

        for (idx, line) in text.split('\n').enumerate() {
            if line.is_empty() {
                continue;
            }
            match f64::from_str(line.trim()) {
                Ok(value) => values.push(value),
                Err(_) => {
                    return Err(ParseError {
                        line: idx + 1,
                        token: line.to_string(),
                    });
                }
            }
        }

        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at position `i`, or `None` past the end of the sequence.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.values.get(i).copied()
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        let seq = NumericSequence::parse("1.0\n2.5\n-3e2\n").unwrap();
        assert_eq!(seq.values(), &[1.0, 2.5, -300.0]);
    }

    #[test]
    fn test_blank_lines_dropped() {
        let seq = NumericSequence::parse("1.0\n\n2.0\n").unwrap();
        assert_eq!(seq.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_empty_input_is_empty_sequence() {
        let seq = NumericSequence::parse("").unwrap();
        assert!(seq.is_empty());
        assert_eq!(seq.len(), 0);
    }

    #[test]
    fn test_crlf_and_padded_tokens() {
        let seq = NumericSequence::parse("1.0\r\n 2.0 \n").unwrap();
        assert_eq!(seq.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_non_numeric_line_fails_whole_parse() {
        let err = NumericSequence::parse("1.0\nabc\n2.0\n").unwrap_err();
        assert_eq!(err.line, 2);
        assert_eq!(err.token, "abc");
    }

    #[test]
    fn test_whitespace_only_line_fails() {
        // Non-empty before trimming, unparseable after.
        assert!(NumericSequence::parse("1.0\n   \n2.0\n").is_err());
    }

    #[test]
    fn test_get_past_end() {
        let seq = NumericSequence::parse("1.0\n").unwrap();
        assert_eq!(seq.get(0), Some(1.0));
        assert_eq!(seq.get(1), None);
    }

    #[test]
    fn test_error_display_names_line_and_token() {
        let err = NumericSequence::parse("x\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("line 1"));
        assert!(msg.contains("\"x\""));
    }
}
