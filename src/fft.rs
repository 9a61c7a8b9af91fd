//! FFT-based decimal multiplication
//!
//! The benchmark multiplier used by `generate`: base-10 digit vectors are
//! convolved with an iterative radix-2 Cooley-Tukey FFT over `Complex64`,
//! then rounded and carry-propagated back into canonical digits.
//!
//! Numbers are represented as little-endian digit vectors (least significant
//! digit first). Both operands are zero-padded to the next power of two at
//! least as large as the combined length, forward-transformed, multiplied
//! pointwise, and inverse-transformed; the real parts of the result are the
//! convolution coefficients.
//!
//! This path is fast but floating-point: once operands reach several million
//! digits, accumulated rounding error can flip a coefficient and corrupt the
//! product. That is exactly what `verify` exists to catch with exact
//! arithmetic.
//!
//! Butterfly passes act on independent blocks, so they can be fanned out
//! over scoped OS threads when a thread count above 1 is requested.

use std::time::{Duration, Instant};

use num_complex::Complex64;

/// Wall-clock split of one multiplication
#[derive(Debug, Clone, Copy, Default)]
pub struct PhaseTimings {
    /// Forward transforms, pointwise product, inverse transform
    pub transform: Duration,

    /// Rounding and base-10 carry propagation
    pub carry: Duration,
}

/// Multiply two little-endian base-10 digit vectors.
///
/// Returns the product in the same representation, trimmed of leading
/// zeros (the number 0 is a single `0` digit), together with per-phase
/// timings. `threads` bounds the worker count for the butterfly passes;
/// 0 and 1 both mean a fully serial run.
pub fn multiply_digits(a: &[u8], b: &[u8], threads: usize) -> (Vec<u8>, PhaseTimings) {
    if a.is_empty() || b.is_empty() {
        return (vec![0], PhaseTimings::default());
    }

    let threads = threads.max(1);

    let mut n = 1usize;
    while n < a.len() + b.len() {
        n <<= 1;
    }

    let mut fa: Vec<Complex64> = a.iter().map(|&d| Complex64::new(f64::from(d), 0.0)).collect();
    let mut fb: Vec<Complex64> = b.iter().map(|&d| Complex64::new(f64::from(d), 0.0)).collect();
    fa.resize(n, Complex64::new(0.0, 0.0));
    fb.resize(n, Complex64::new(0.0, 0.0));

    let transform_started = Instant::now();
    fft(&mut fa, false, threads);
    fft(&mut fb, false, threads);
    for (x, y) in fa.iter_mut().zip(fb.iter().copied()) {
        *x *= y;
    }
    fft(&mut fa, true, threads);
    let transform = transform_started.elapsed();

    let carry_started = Instant::now();
    let mut digits = Vec::with_capacity(n + 1);
    let mut carry: i64 = 0;
    for value in &fa {
        let total = value.re.round() as i64 + carry;
        // Rounding error above 0.5 can push a coefficient negative;
        // rem_euclid keeps every emitted digit in 0..=9 so a corrupted
        // product is still a parseable decimal downstream.
        let digit = total.rem_euclid(10);
        digits.push(digit as u8);
        carry = (total - digit) / 10;
    }
    while carry > 0 {
        digits.push((carry % 10) as u8);
        carry /= 10;
    }
    while digits.len() > 1 && digits.last() == Some(&0) {
        digits.pop();
    }
    let carry_elapsed = carry_started.elapsed();

    (
        digits,
        PhaseTimings {
            transform,
            carry: carry_elapsed,
        },
    )
}

/// Little-endian digit vector of canonical decimal text
pub fn digits_from_decimal(text: &str) -> Vec<u8> {
    debug_assert!(text.bytes().all(|b| b.is_ascii_digit()));
    text.bytes().rev().map(|b| b - b'0').collect()
}

/// Decimal text of a little-endian digit vector
pub fn decimal_from_digits(digits: &[u8]) -> String {
    digits.iter().rev().map(|&d| char::from(b'0' + d)).collect()
}

/// In-place iterative radix-2 FFT.
///
/// `values.len()` must be a power of two. The inverse transform divides by
/// the length, so forward-then-inverse is the identity up to float error.
fn fft(values: &mut [Complex64], invert: bool, threads: usize) {
    let n = values.len();
    debug_assert!(n.is_power_of_two());
    if n <= 1 {
        return;
    }

    bit_reverse_permute(values);

    let mut len = 2;
    while len <= n {
        let half = len / 2;
        let sign = if invert { -1.0 } else { 1.0 };
        let step = sign * std::f64::consts::TAU / len as f64;
        let twiddles: Vec<Complex64> = (0..half)
            .map(|j| Complex64::from_polar(1.0, step * j as f64))
            .collect();

        let blocks = n / len;
        if threads > 1 && blocks >= threads {
            let per_thread = blocks.div_ceil(threads);
            std::thread::scope(|scope| {
                for chunk in values.chunks_mut(per_thread * len) {
                    let twiddles = &twiddles;
                    scope.spawn(move || {
                        for block in chunk.chunks_mut(len) {
                            butterfly_block(block, twiddles);
                        }
                    });
                }
            });
        } else {
            for block in values.chunks_mut(len) {
                butterfly_block(block, &twiddles);
            }
        }

        len <<= 1;
    }

    if invert {
        let scale = 1.0 / n as f64;
        for value in values.iter_mut() {
            *value = value.scale(scale);
        }
    }
}

/// One butterfly pass over a single block of size `2 * twiddles.len()`
fn butterfly_block(block: &mut [Complex64], twiddles: &[Complex64]) {
    let half = twiddles.len();
    for j in 0..half {
        let u = block[j];
        let v = block[j + half] * twiddles[j];
        block[j] = u + v;
        block[j + half] = u - v;
    }
}

/// Reorder `values` by bit-reversed index, the input order the iterative
/// butterfly passes expect
fn bit_reverse_permute(values: &mut [Complex64]) {
    let n = values.len();
    let lg = n.trailing_zeros();
    for i in 0..n {
        let j = i.reverse_bits() >> (usize::BITS - lg);
        if i < j {
            values.swap(i, j);
        }
    }
}
