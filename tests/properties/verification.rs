//! Property tests for exact product verification.

use num_bigint::BigInt;
use proptest::prelude::*;

use mulcheck::models::Verdict;
use mulcheck::verify::verify;

fn bigint() -> impl Strategy<Value = BigInt> {
    // Decimal strings up to 80 digits, optionally negated.
    ("[0-9]{1,80}", any::<bool>()).prop_map(|(digits, negative)| {
        let value: BigInt = digits.parse().unwrap();
        if negative {
            -value
        } else {
            value
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the true product always verifies as a match.
    #[test]
    fn property_true_product_matches(a in bigint(), b in bigint()) {
        let product = &a * &b;
        prop_assert_eq!(verify(&a, &b, &product), Verdict::Match);
    }

    /// PROPERTY: any nonzero offset from the true product is a mismatch.
    #[test]
    fn property_offset_product_mismatches(
        a in bigint(),
        b in bigint(),
        offset in prop_oneof![Just(-1i64), Just(1i64), 2i64..1000],
    ) {
        let expected = &a * &b + BigInt::from(offset);
        prop_assert_eq!(verify(&a, &b, &expected), Verdict::Mismatch);
    }

    /// PROPERTY: verification is symmetric in the operands.
    #[test]
    fn property_verify_is_commutative(a in bigint(), b in bigint()) {
        let product = &a * &b;
        prop_assert_eq!(verify(&a, &b, &product), verify(&b, &a, &product));
    }
}
