//! Property tests for the depth-of-field formulas.

use proptest::prelude::*;

use dofcalc::{Distance, DofCalculator, DofError, Lens, Sensor, ZeissRatio};

fn lens_strategy() -> impl Strategy<Value = Lens> {
    // Real lenses focus no closer than a couple of focal lengths
    (10.0f64..600.0, 1.0f64..5.6, 2.0f64..20.0).prop_map(|(focal, max_aperture, k)| {
        Lens::from_parts("Test", None, max_aperture, 32.0, focal, focal * k).unwrap()
    })
}

fn calculator() -> impl Strategy<Value = DofCalculator> {
    lens_strategy().prop_map(|lens| DofCalculator::new(Sensor::full_frame(), lens))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the hyperfocal distance is always beyond the focal length.
    #[test]
    fn property_hyperfocal_exceeds_focal_length(calc in calculator(), aperture in 5.6f64..=32.0) {
        let h = calc.hyperfocal_distance(aperture, ZeissRatio::Modern).unwrap();
        prop_assert!(h > calc.lens().focal_length());
    }

    /// PROPERTY: stopping down never moves the hyperfocal distance further away.
    #[test]
    fn property_hyperfocal_shrinks_when_stopping_down(
        calc in calculator(),
        a in 5.6f64..=32.0,
        b in 5.6f64..=32.0,
    ) {
        let (wide, narrow) = if a <= b { (a, b) } else { (b, a) };
        let h_wide = calc.hyperfocal_distance(wide, ZeissRatio::Modern).unwrap();
        let h_narrow = calc.hyperfocal_distance(narrow, ZeissRatio::Modern).unwrap();
        prop_assert!(h_narrow <= h_wide);
    }

    /// PROPERTY: focusing at or beyond the hyperfocal distance makes the far limit infinite.
    #[test]
    fn property_far_limit_is_infinite_beyond_hyperfocal(
        calc in calculator(),
        aperture in 5.6f64..=32.0,
        extra in 0.0f64..1.0e6,
    ) {
        let h = calc.hyperfocal_distance(aperture, ZeissRatio::Modern).unwrap();
        let s = (h + extra).max(calc.lens().minimal_focal_distance());
        let far = calc.far_distance(s, aperture, ZeissRatio::Modern).unwrap();
        prop_assert_eq!(far, Distance::Infinity);
    }

    /// PROPERTY: below the hyperfocal distance, near <= s <= far and all are finite.
    #[test]
    fn property_limits_bracket_focus_distance(
        calc in calculator(),
        aperture in 5.6f64..=32.0,
        fraction in 0.0f64..0.99,
    ) {
        let h = calc.hyperfocal_distance(aperture, ZeissRatio::Modern).unwrap();
        let min_focus = calc.lens().minimal_focal_distance();
        prop_assume!(min_focus < h * 0.99);
        let s = min_focus + (h * 0.99 - min_focus) * fraction;

        let dof = calc.depth_of_field(s, aperture, ZeissRatio::Modern).unwrap();
        let near = dof.near.millimeters().unwrap();
        let far = dof.far.millimeters().unwrap();
        prop_assert!(near <= s * (1.0 + 1e-12));
        prop_assert!(far >= s * (1.0 - 1e-12));
        prop_assert_eq!(dof.total, Distance::Finite(far - near));
    }

    /// PROPERTY: apertures outside the lens range fail, whatever the focus distance.
    #[test]
    fn property_unsupported_aperture_is_rejected(
        calc in calculator(),
        aperture in 32.5f64..100.0,
    ) {
        let min_focus = calc.lens().minimal_focal_distance();
        let result = calc.near_distance(min_focus, aperture, ZeissRatio::Modern);
        let is_above_max = matches!(result, Err(DofError::ApertureAboveLensMaximum { .. }));
        prop_assert!(is_above_max);
    }

    /// PROPERTY: focus distances closer than the lens can focus fail.
    #[test]
    fn property_too_close_is_rejected(calc in calculator(), fraction in 0.0f64..0.999) {
        let s = calc.lens().minimal_focal_distance() * fraction;
        let result = calc.far_distance(s, 8.0, ZeissRatio::Modern);
        let is_too_close = matches!(result, Err(DofError::ObjectDistanceBelowMinimumFocus { .. }));
        prop_assert!(is_too_close);
    }
}
