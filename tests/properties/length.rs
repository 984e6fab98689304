//! Property tests for unit-suffixed lengths.

use proptest::prelude::*;

use dofcalc::{parse_length, LengthUnit};

fn unit() -> impl Strategy<Value = LengthUnit> {
    prop::sample::select(vec![
        LengthUnit::Millimeter,
        LengthUnit::Centimeter,
        LengthUnit::Decimeter,
        LengthUnit::Meter,
        LengthUnit::Kilometer,
    ])
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: "<n><unit>" parses to n times the unit factor.
    #[test]
    fn property_suffix_scales_value(n in 0u32..100_000, unit in unit()) {
        let parsed = parse_length(&format!("{}{}", n, unit.symbol())).unwrap();
        prop_assert_eq!(parsed, f64::from(n) * unit.factor());
    }

    /// PROPERTY: a bare number is millimeters.
    #[test]
    fn property_bare_number_is_millimeters(n in 0u32..100_000) {
        prop_assert_eq!(parse_length(&n.to_string()).unwrap(), f64::from(n));
    }

    /// PROPERTY: parsing never panics.
    #[test]
    fn property_parse_length_never_panics(s in ".{0,32}") {
        let _ = parse_length(&s);
    }
}
