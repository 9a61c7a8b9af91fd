//! Property tests for decimal operand parsing.

use std::path::Path;

use num_bigint::BigInt;
use proptest::prelude::*;

use mulcheck::parser::parse_decimal;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: `parse_decimal` never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(text in "(?s).{0,256}") {
        let _ = parse_decimal(&text, Path::new("num1.txt"));
    }

    /// PROPERTY: surrounding whitespace never changes the parsed value.
    #[test]
    fn property_whitespace_is_insignificant(
        value in any::<i128>(),
        lead in "[ \t\r\n]{0,8}",
        trail in "[ \t\r\n]{0,8}",
    ) {
        let padded = format!("{}{}{}", lead, value, trail);
        let parsed = parse_decimal(&padded, Path::new("num1.txt")).unwrap();
        prop_assert_eq!(parsed, BigInt::from(value));
    }

    /// PROPERTY: canonical digit strings always parse back to themselves.
    #[test]
    fn property_digit_strings_round_trip(digits in "[1-9][0-9]{0,64}") {
        let parsed = parse_decimal(&digits, Path::new("num1.txt")).unwrap();
        prop_assert_eq!(parsed.to_string(), digits);
    }

    /// PROPERTY: a non-digit character anywhere in the number is rejected.
    #[test]
    fn property_interior_garbage_is_rejected(
        prefix in "[0-9]{1,8}",
        junk in "[a-zA-Z_.,]",
        suffix in "[0-9]{0,8}",
    ) {
        let text = format!("{}{}{}", prefix, junk, suffix);
        prop_assert!(parse_decimal(&text, Path::new("num1.txt")).is_err());
    }
}
