//! Property tests for the JSON lens catalog.

use std::path::Path;

use proptest::prelude::*;

use dofcalc::infrastructure::repositories::{parse_catalog, render_catalog};
use dofcalc::{Lens, LensCatalog};

/// One-decimal values, the way lens data is written by hand
fn tenths(range: std::ops::Range<u32>) -> impl Strategy<Value = f64> {
    range.prop_map(|n| f64::from(n) / 10.0)
}

fn lens_strategy() -> impl Strategy<Value = Lens> {
    (
        "[A-Z][a-z]{1,8}",
        proptest::option::of("[A-Za-z0-9 ./|-]{1,24}"),
        tenths(7..80),
        tenths(80..640),
        tenths(80..8000),
        tenths(1000..100_000),
    )
        .prop_map(|(manufacturer, model, max_aperture, min_aperture, focal, min_focus)| {
            Lens::from_parts(manufacturer, model, max_aperture, min_aperture, focal, min_focus)
                .unwrap()
        })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: rendering then parsing a catalog yields the same lenses in the same order.
    #[test]
    fn property_catalog_round_trips(lenses in proptest::collection::vec(lens_strategy(), 0..12)) {
        let catalog = LensCatalog::from_lenses(lenses);
        let rendered = render_catalog(&catalog).unwrap();
        let parsed = parse_catalog(&rendered, Path::new("lenses.json")).unwrap();

        prop_assert_eq!(parsed.len(), catalog.len());
        for (a, b) in catalog.sorted().into_iter().zip(parsed.sorted()) {
            prop_assert_eq!(a, b);
            prop_assert_eq!(a.min_aperture(), b.min_aperture());
            prop_assert_eq!(a.minimal_focal_distance(), b.minimal_focal_distance());
        }
    }

    /// PROPERTY: adding an equal lens twice never grows the catalog.
    #[test]
    fn property_upsert_is_idempotent(lens in lens_strategy()) {
        let mut catalog = LensCatalog::new();
        prop_assert!(catalog.upsert(lens.clone()));
        prop_assert!(!catalog.upsert(lens));
        prop_assert_eq!(catalog.len(), 1);
    }

    /// PROPERTY: decoding arbitrary text never panics.
    #[test]
    fn property_parse_catalog_never_panics(s in ".{0,256}") {
        let _ = parse_catalog(&s, Path::new("lenses.json"));
    }
}
