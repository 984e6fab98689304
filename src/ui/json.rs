//! JSON output for `--json`
//!
//! Every command writes exactly one JSON document per line on stdout.

use std::io::{self, Write};

use serde::Serialize;

/// Write one JSON document followed by a newline.
pub fn write_event<T: Serialize>(out: &mut impl Write, event: &T) -> io::Result<()> {
    let json =
        serde_json::to_string(event).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    out.write_all(json.as_bytes())?;
    out.write_all(b"\n")?;
    Ok(())
}

/// Emit a typed event to stdout.
pub fn emit_event<T: Serialize>(event: &T) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write_event(&mut out, event)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_event_is_one_line() {
        let mut buf = Vec::new();
        write_event(&mut buf, &serde_json::json!({ "event": "test", "value": 1 })).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "{\"event\":\"test\",\"value\":1}\n");
    }
}
