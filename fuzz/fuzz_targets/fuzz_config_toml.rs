#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and resolution should never panic
        if let Ok((config, _warnings)) =
            dofcalc::config::parse_with_warnings(content, Path::new("fuzz.toml"))
        {
            let _ = config.sensor();
            let _ = config.coc_divisor();
        }
    }
});
