//! Error types for mulcheck
//!
//! Uses `thiserror` for library errors; the binary aggregates into `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mulcheck operations
pub type MulcheckResult<T> = Result<T, MulcheckError>;

/// Main error type for mulcheck operations
///
/// Every file-related variant carries the offending path so that a failed
/// run always names the file or step that broke.
#[derive(Error, Debug)]
pub enum MulcheckError {
    /// An input file is missing or unreadable
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// An output file could not be written
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// File content is not a well-formed decimal integer after trimming
    #[error("invalid integer in {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    /// mulcheck.toml exists but cannot be parsed
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },

    /// No input directory was given and none of the three paths were
    /// supplied explicitly
    #[error("no input directory: pass --dir, set MULCHECK_DIR, or give --num1, --num2 and --result explicitly")]
    NoInputDir,

    /// Generation was asked for a zero-length operand
    #[error("--digits must be at least 1")]
    InvalidDigits,
}
