//! Logging setup for the `rdrills` binary.
//!
//! Drill output goes to stdout, so every log line goes to stderr. The level
//! comes from `RDRILLS_LOG` when it is set (any `EnvFilter` directive) and
//! from the verbosity count otherwise.

use std::io::{self, IsTerminal};

use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "RDRILLS_LOG";

/// Maps a `-v` count to a level. No flags means warnings only.
#[must_use]
pub fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Builds the filter: `RDRILLS_LOG` wins over the verbosity count.
#[must_use]
pub fn filter_for(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for(verbosity).to_string()))
}

/// Installs a compact stderr subscriber. Colours are only used when stderr
/// is a terminal. Calling it twice is harmless; the second call leaves the
/// first subscriber in place.
pub fn init_logger(verbosity: u8) {
    let layer = fmt::layer()
        .compact()
        .with_target(true)
        .without_time()
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    let _ = tracing_subscriber::registry()
        .with(filter_for(verbosity))
        .with(layer)
        .try_init();
}
