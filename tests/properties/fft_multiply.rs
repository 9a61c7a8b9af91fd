//! Property tests for the FFT convolution multiplier.

use num_bigint::BigUint;
use proptest::prelude::*;

use mulcheck::fft::{decimal_from_digits, digits_from_decimal, multiply_digits};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 48,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the FFT multiplier agrees with exact arithmetic.
    #[test]
    fn property_fft_agrees_with_exact(
        a in "[1-9][0-9]{0,300}",
        b in "[1-9][0-9]{0,300}",
    ) {
        let (digits, _) = multiply_digits(&digits_from_decimal(&a), &digits_from_decimal(&b), 1);
        let fft_product = decimal_from_digits(&digits);

        let exact = a.parse::<BigUint>().unwrap() * b.parse::<BigUint>().unwrap();
        prop_assert_eq!(fft_product, exact.to_string());
    }

    /// PROPERTY: products never carry leading zeros.
    #[test]
    fn property_product_has_no_leading_zeros(
        a in "[0-9]{1,64}",
        b in "[0-9]{1,64}",
    ) {
        let (digits, _) = multiply_digits(&digits_from_decimal(&a), &digits_from_decimal(&b), 1);
        prop_assert!(digits.len() == 1 || digits.last() != Some(&0));
    }

    /// PROPERTY: the thread count never changes the product.
    #[test]
    fn property_thread_count_is_invisible(
        a in "[1-9][0-9]{0,200}",
        b in "[1-9][0-9]{0,200}",
        threads in 1usize..=8,
    ) {
        let da = digits_from_decimal(&a);
        let db = digits_from_decimal(&b);

        let (serial, _) = multiply_digits(&da, &db, 1);
        let (parallel, _) = multiply_digits(&da, &db, threads);
        prop_assert_eq!(serial, parallel);
    }
}
