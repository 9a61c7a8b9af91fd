//! Decimal integer parser for input files
//!
//! Implements the load step shared by both subcommands: read the whole file,
//! trim surrounding whitespace, parse what remains as a base-10
//! arbitrary-precision integer. Every failure names the file; parse failures
//! additionally pinpoint the first offending character.

use std::fs;
use std::path::Path;

use num_bigint::BigInt;

use crate::error::{MulcheckError, MulcheckResult};
use crate::models::Operand;

/// Read one decimal integer file into an `Operand`
///
/// The file handle is scoped to the read; it is closed before parsing
/// starts, on success and failure alike.
pub fn load_operand(path: &Path) -> MulcheckResult<Operand> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        // read_to_string reports undecodable bytes as InvalidData; that is
        // malformed content, not a filesystem failure
        Err(source) if source.kind() == std::io::ErrorKind::InvalidData => {
            return Err(MulcheckError::Parse {
                path: path.to_path_buf(),
                message: "not valid UTF-8 text".to_string(),
            })
        }
        Err(source) => {
            return Err(MulcheckError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let value = parse_decimal(&content, path)?;
    let digits = significant_digits(&content);

    Ok(Operand::new(value, path, digits))
}

/// Parse decimal text into a `BigInt`
///
/// Surrounding whitespace is ignored; one leading `+` or `-` is allowed.
/// Anything else (empty content, stray characters, internal whitespace,
/// a misplaced sign) is a parse error naming `path`.
///
/// # Example
/// ```
/// use std::path::Path;
/// use num_bigint::BigInt;
///
/// let n = mulcheck::parser::parse_decimal(" 42\n", Path::new("num1.txt")).unwrap();
/// assert_eq!(n, BigInt::from(42));
/// ```
pub fn parse_decimal(text: &str, path: &Path) -> MulcheckResult<BigInt> {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return Err(MulcheckError::Parse {
            path: path.to_path_buf(),
            message: "file is empty".to_string(),
        });
    }

    if !is_decimal_integer(trimmed) {
        return Err(MulcheckError::Parse {
            path: path.to_path_buf(),
            message: describe_invalid(trimmed),
        });
    }

    trimmed.parse::<BigInt>().map_err(|_| MulcheckError::Parse {
        path: path.to_path_buf(),
        message: describe_invalid(trimmed),
    })
}

/// Count the significant decimal digits of valid integer text
///
/// Sign and leading zeros do not count; the number 0 has one digit.
pub fn significant_digits(text: &str) -> usize {
    let body = text.trim().trim_start_matches(['+', '-']);
    let body = body.trim_start_matches('0');
    if body.is_empty() {
        1
    } else {
        body.len()
    }
}

/// One optional sign followed by at least one ASCII digit.
///
/// Checked before handing text to num-bigint, whose own parser tolerates
/// `_` digit separators the file format does not allow.
fn is_decimal_integer(trimmed: &str) -> bool {
    let body = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    !body.is_empty() && body.bytes().all(|b| b.is_ascii_digit())
}

/// Build a diagnostic for text that failed the shape check
///
/// Offsets are byte positions within the trimmed text, so they line up with
/// what the user sees after stripping padding.
fn describe_invalid(trimmed: &str) -> String {
    let (sign_len, body) = match trimmed.strip_prefix(['+', '-']) {
        Some(rest) => (1, rest),
        None => (0, trimmed),
    };

    if body.is_empty() {
        return "sign with no digits".to_string();
    }

    match body.char_indices().find(|(_, c)| !c.is_ascii_digit()) {
        Some((i, c)) => format!("unexpected character {:?} at offset {}", c, sign_len + i),
        None => "not a decimal integer".to_string(),
    }
}
