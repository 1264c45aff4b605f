// src/log.rs
//
// Log lines go to stderr with time since start, e.g.
//   0.412s  INFO ecb_scrape::scrape: year done year=1999 end_year=2024 total=11

use tracing_subscriber::{EnvFilter, fmt::time::Uptime};

/// Level used when `RUST_LOG` is not set.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}

/// Install the global subscriber. `RUST_LOG` takes precedence over `-v`.
/// Calling this twice is harmless; the second call is ignored.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(Uptime::default())
        .with_writer(std::io::stderr)
        .try_init();
}
