//! Product verification
//!
//! The trusted half of the tool: multiply the two operands exactly with
//! num-bigint and compare against the recorded product. num-bigint switches
//! to Karatsuba and then Toom-Cook-3 as operands grow, so the exact multiply
//! stays sub-quadratic even on million-digit inputs.

use std::time::{Duration, Instant};

use num_bigint::BigInt;

use crate::config::InputPaths;
use crate::error::MulcheckResult;
use crate::models::{Operand, Verdict};
use crate::parser::load_operand;

/// Result of one verification run
#[derive(Debug, Clone)]
pub struct VerifyReport {
    pub verdict: Verdict,

    /// Significant digits of the first operand
    pub num1_digits: usize,

    /// Significant digits of the second operand
    pub num2_digits: usize,

    /// Significant digits of the recorded product
    pub expected_digits: usize,

    /// Wall-clock time of the multiply-and-compare step
    pub elapsed: Duration,
}

/// Compare `a * b` against `expected`
///
/// Deterministic in the three values: no I/O, no randomness, no time
/// dependence.
pub fn verify(a: &BigInt, b: &BigInt, expected: &BigInt) -> Verdict {
    if a * b == *expected {
        Verdict::Match
    } else {
        Verdict::Mismatch
    }
}

/// Multiply the operands exactly and compare with the recorded product
pub fn check_product(num1: &Operand, num2: &Operand, expected: &Operand) -> VerifyReport {
    let started = Instant::now();
    let verdict = verify(&num1.value, &num2.value, &expected.value);

    VerifyReport {
        verdict,
        num1_digits: num1.digits,
        num2_digits: num2.digits,
        expected_digits: expected.digits,
        elapsed: started.elapsed(),
    }
}

/// Load all three files named by `paths` and check them in one call
///
/// The reads are sequential; the first failure aborts the run with the
/// failing path in the error.
pub fn verify_files(paths: &InputPaths) -> MulcheckResult<VerifyReport> {
    let num1 = load_operand(&paths.num1)?;
    let num2 = load_operand(&paths.num2)?;
    let expected = load_operand(&paths.result)?;

    Ok(check_product(&num1, &num2, &expected))
}
