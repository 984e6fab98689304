//! Diagnostic logging
//!
//! Library code only emits `tracing` events; the binary installs the
//! subscriber once at startup. Logs go to stderr so stdout stays clean for
//! results and `--json` output.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a `-v` count; `RUST_LOG` wins when set
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "dofcalc=warn",
        1 => "dofcalc=info",
        2 => "dofcalc=debug",
        _ => "dofcalc=trace",
    }
}

pub fn init(verbosity: u8, ansi: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(ansi)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    if result.is_err() {
        tracing::debug!("logger already installed");
    }
}
