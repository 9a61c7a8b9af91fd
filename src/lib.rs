//! Mulcheck - big integer multiplication checker
//!
//! Mulcheck verifies that a recorded product equals the exact product of two
//! arbitrary-precision decimal integers stored in plain text files. It also
//! generates benchmark inputs with a floating-point FFT convolution
//! multiplier, the fast-but-fallible producer the verifier exists to check.

pub mod config;
pub mod error;
pub mod fft;
pub mod generate;
pub mod models;
pub mod parser;
pub mod verify;

// Re-exports for convenience
pub use config::{Config, FileNames, GenerateConfig, InputPaths, PathArgs};
pub use error::{MulcheckError, MulcheckResult};
pub use fft::{multiply_digits, PhaseTimings};
pub use generate::{generate, GenerateOptions, GenerateReport};
pub use models::{Operand, Verdict};
pub use parser::{load_operand, parse_decimal};
pub use verify::{check_product, verify_files, VerifyReport};
