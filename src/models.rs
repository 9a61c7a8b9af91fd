//! Core data models for mulcheck
//!
//! Defines the data structures shared across the verifier and generator:
//! - `Operand`: an arbitrary-precision integer with its file provenance
//! - `Verdict`: the match/mismatch outcome of one verification

use std::fmt;
use std::path::PathBuf;

use num_bigint::BigInt;

/// An arbitrary-precision integer parsed from a decimal text file
///
/// Operands are created once at load time and never mutated. The digit count
/// is taken from the source text rather than re-deriving it from the value,
/// so reporting stays O(1) even for million-digit inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    /// Parsed value
    pub value: BigInt,

    /// File the value came from
    pub source: PathBuf,

    /// Significant decimal digits (sign and leading zeros excluded)
    pub digits: usize,
}

impl Operand {
    /// Create a new operand
    pub fn new(value: BigInt, source: impl Into<PathBuf>, digits: usize) -> Self {
        Self {
            value,
            source: source.into(),
            digits,
        }
    }
}

/// Outcome of one verification run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The recorded product equals num1 * num2
    Match,
    /// The recorded product differs from num1 * num2
    Mismatch,
}

impl Verdict {
    pub fn is_match(&self) -> bool {
        matches!(self, Verdict::Match)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Match => write!(f, "match"),
            Verdict::Mismatch => write!(f, "mismatch"),
        }
    }
}
