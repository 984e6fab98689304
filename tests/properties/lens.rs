//! Property tests for lens validation.

use proptest::prelude::*;

use dofcalc::{DofError, Lens};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a lens exists iff its widest f-number does not exceed its narrowest.
    #[test]
    fn property_aperture_range_validation(
        max_aperture in 0.5f64..64.0,
        min_aperture in 0.5f64..64.0,
    ) {
        let lens = Lens::from_parts("Test", None, max_aperture, min_aperture, 50.0, 450.0);
        if max_aperture <= min_aperture {
            let lens = lens.unwrap();
            prop_assert!(lens.supports_aperture(max_aperture));
            prop_assert!(lens.supports_aperture(min_aperture));
        } else {
            let is_range_error = matches!(lens, Err(DofError::InvalidApertureRange { .. }));
            prop_assert!(is_range_error);
        }
    }

    /// PROPERTY: apertures outside the lens range are not supported.
    #[test]
    fn property_supports_aperture_matches_range(aperture in 0.1f64..100.0) {
        let lens = Lens::from_parts("Test", None, 2.8, 22.0, 50.0, 450.0).unwrap();
        prop_assert_eq!(lens.supports_aperture(aperture), (2.8..=22.0).contains(&aperture));
    }

    /// PROPERTY: equal lenses hash equally, whatever the non-identity fields.
    #[test]
    fn property_identity_ignores_min_aperture_and_focus(
        min_aperture in 2.8f64..64.0,
        min_focus in 1.0f64..5000.0,
    ) {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let a = Lens::from_parts("Sigma", Some("Macro".to_string()), 2.8, 22.0, 105.0, 295.0).unwrap();
        let b = Lens::from_parts("Sigma", Some("Macro".to_string()), 2.8, min_aperture, 105.0, min_focus).unwrap();
        prop_assert_eq!(&a, &b);

        let hash = |lens: &Lens| {
            let mut hasher = DefaultHasher::new();
            lens.hash(&mut hasher);
            hasher.finish()
        };
        prop_assert_eq!(hash(&a), hash(&b));
    }
}
