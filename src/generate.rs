//! Random operand generation
//!
//! Engine behind the `generate` subcommand: draws two uniformly random
//! N-digit decimal operands, writes them to the num1 and num2 paths,
//! multiplies them with the FFT convolution multiplier, and records the
//! product at the result path. The output is exactly the three-file layout
//! `verify` consumes, so a generate-then-verify round on the same directory
//! checks the multiplier against exact arithmetic.

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::InputPaths;
use crate::error::{MulcheckError, MulcheckResult};
use crate::fft::{self, PhaseTimings};

/// Digit count used when neither the command line nor mulcheck.toml says
/// otherwise
pub const DEFAULT_DIGITS: usize = 1_000_000;

/// Knobs for one generation run
#[derive(Debug, Clone, Copy)]
pub struct GenerateOptions {
    /// Digit count of each operand (must be at least 1)
    pub digits: usize,

    /// RNG seed; `None` draws from OS entropy
    pub seed: Option<u64>,

    /// Worker threads for the FFT butterfly passes
    pub threads: usize,
}

/// What one generation run produced
#[derive(Debug, Clone, Copy)]
pub struct GenerateReport {
    /// Digit count of each operand, as requested
    pub digits: usize,

    /// Digit count of the written product
    pub product_digits: usize,

    /// Seed the RNG was built from, if one was given
    pub seed: Option<u64>,

    /// Thread count the multiplier ran with
    pub threads: usize,

    /// Transform and carry phase durations
    pub timings: PhaseTimings,

    /// Whole run, generation and writes included
    pub elapsed: Duration,
}

/// Thread count to use when none is configured: one per available core
pub fn default_threads() -> usize {
    std::thread::available_parallelism()
        .map(NonZeroUsize::get)
        .unwrap_or(1)
}

/// Generate two random operands and their FFT-computed product.
///
/// Writes all three files under `paths`. Operands have exactly
/// `options.digits` digits with a nonzero leading digit, so the written
/// numbers never carry leading zeros.
pub fn generate(paths: &InputPaths, options: &GenerateOptions) -> MulcheckResult<GenerateReport> {
    if options.digits == 0 {
        return Err(MulcheckError::InvalidDigits);
    }

    let started = Instant::now();

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let a = random_digits(&mut rng, options.digits);
    let b = random_digits(&mut rng, options.digits);

    write_operand(&paths.num1, &a)?;
    write_operand(&paths.num2, &b)?;

    let (product, timings) = fft::multiply_digits(&a, &b, options.threads);
    write_operand(&paths.result, &product)?;

    Ok(GenerateReport {
        digits: options.digits,
        product_digits: product.len(),
        seed: options.seed,
        threads: options.threads,
        timings,
        elapsed: started.elapsed(),
    })
}

/// Little-endian digit vector with a nonzero most significant digit
fn random_digits(rng: &mut StdRng, digits: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(digits);
    for _ in 1..digits {
        out.push(rng.gen_range(0..10u8));
    }
    out.push(rng.gen_range(1..10u8));
    out
}

/// Write one number as a decimal line
fn write_operand(path: &Path, digits: &[u8]) -> MulcheckResult<()> {
    let mut text = fft::decimal_from_digits(digits);
    text.push('\n');
    fs::write(path, text).map_err(|source| MulcheckError::Write {
        path: path.to_path_buf(),
        source,
    })
}
