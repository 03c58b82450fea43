#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Property-based tests for classification, parsing and rendering.
//!
//! Uses proptest to check the sign rule over whole classes of `f64` rather
//! than hand-picked samples.

use numsign_core::{Sign, check_input, classify, parse_number, render_value};
use proptest::num::f64::{INFINITE, NEGATIVE, NORMAL, POSITIVE, SUBNORMAL};
use proptest::prelude::*;

/// Any NaN bit pattern, either sign, any non-zero payload.
fn nan() -> impl Strategy<Value = f64> {
    (any::<bool>(), 1u64..(1u64 << 52)).prop_map(|(negative, payload)| {
        let sign = if negative { 1u64 << 63 } else { 0 };
        f64::from_bits(sign | 0x7ff0_0000_0000_0000 | payload)
    })
}

proptest! {
    #[test]
    fn positive_values_classify_positive(v in POSITIVE | NORMAL | SUBNORMAL | INFINITE) {
        prop_assert!(v > 0.0);
        prop_assert_eq!(classify(v).sign(), Sign::Positive);
    }

    #[test]
    fn negative_values_classify_negative(v in NEGATIVE | NORMAL | SUBNORMAL | INFINITE) {
        prop_assert!(v < 0.0);
        prop_assert_eq!(classify(v).sign(), Sign::Negative);
    }

    #[test]
    fn signed_zero_classifies_zero(v in prop_oneof![Just(0.0f64), Just(-0.0f64)]) {
        prop_assert_eq!(classify(v).sign(), Sign::Zero);
    }

    #[test]
    fn every_nan_classifies_zero(v in nan()) {
        prop_assert!(v.is_nan());
        prop_assert_eq!(classify(v).sign(), Sign::Zero);
    }

    #[test]
    fn display_text_round_trips_to_same_sign(v in any::<f64>()) {
        let parsed = check_input(Some(&format!("{v}"))).unwrap();
        prop_assert_eq!(parsed.sign(), classify(v).sign());
    }

    #[test]
    fn rendered_value_parses_back_exactly(
        v in POSITIVE | NEGATIVE | NORMAL | SUBNORMAL
    ) {
        let rendered = render_value(v);
        let parsed = parse_number(&rendered).unwrap();
        prop_assert_eq!(parsed.to_bits(), v.to_bits(), "rendered {}", rendered);
    }

    #[test]
    fn separated_integers_parse(groups in prop::collection::vec(0u32..1000, 1..5)) {
        let plain: String = groups.iter().map(u32::to_string).collect();
        let separated = groups
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join("_");
        prop_assert_eq!(parse_number(&separated), parse_number(&plain));
    }
}
