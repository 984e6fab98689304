//! Property tests for sensor geometry.

use proptest::prelude::*;

use dofcalc::{CocDivisor, DofError, Sensor, SensorFormat, ZeissRatio};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the diagonal is sqrt(w² + h²) and the CoC is the diagonal over the divisor.
    #[test]
    fn property_diagonal_and_coc(
        width in 0.1f64..100.0,
        height in 0.1f64..100.0,
        divisor in 1.0f64..5000.0,
    ) {
        let sensor = Sensor::new(width, height).unwrap();
        let diagonal = (width * width + height * height).sqrt();
        prop_assert!((sensor.diagonal() - diagonal).abs() < 1e-9);

        let coc = sensor.circle_of_confusion(CocDivisor::custom(divisor).unwrap());
        prop_assert!((coc - diagonal / divisor).abs() < 1e-12);
        prop_assert!(coc > 0.0);
    }

    /// PROPERTY: a wider Zeiss divisor always gives a smaller circle of confusion.
    #[test]
    fn property_classic_coc_is_strictest(format in prop::sample::select(SensorFormat::ALL.to_vec())) {
        let sensor = format.sensor();
        let classic = sensor.circle_of_confusion(ZeissRatio::Classic);
        let modern = sensor.circle_of_confusion(ZeissRatio::Modern);
        let traditional = sensor.circle_of_confusion(ZeissRatio::Traditional);
        prop_assert!(classic < modern);
        prop_assert!(modern < traditional);
    }

    /// PROPERTY: non-positive dimensions are always rejected.
    #[test]
    fn property_non_positive_dimensions_rejected(
        width in -100.0f64..=0.0,
        height in 0.1f64..100.0,
    ) {
        prop_assert!(
            matches!(
                Sensor::new(width, height),
                Err(DofError::InvalidSensorDimensions { .. })
            ),
            "width {} accepted",
            width
        );
        prop_assert!(Sensor::new(height, width).is_err());
    }

    /// PROPERTY: crop factor times diagonal recovers the full-frame diagonal.
    #[test]
    fn property_crop_factor_scales_to_full_frame(
        width in 1.0f64..60.0,
        height in 1.0f64..60.0,
    ) {
        let sensor = Sensor::new(width, height).unwrap();
        let full_frame = Sensor::full_frame().diagonal();
        prop_assert!((sensor.crop_factor() * sensor.diagonal() - full_frame).abs() < 1e-9);
    }
}
