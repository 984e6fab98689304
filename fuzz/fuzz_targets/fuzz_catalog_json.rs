#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

use dofcalc::infrastructure::repositories::{parse_catalog, render_catalog};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Decoding never panics; whatever decodes re-encodes and decodes to the same catalog
        if let Ok(catalog) = parse_catalog(content, Path::new("fuzz.json")) {
            let rendered = render_catalog(&catalog).expect("valid catalog renders");
            let reparsed =
                parse_catalog(&rendered, Path::new("fuzz.json")).expect("rendered catalog parses");
            assert_eq!(catalog.len(), reparsed.len());
        }
    }
});
