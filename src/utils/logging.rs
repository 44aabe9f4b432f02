//! Structured logging to a file.
//!
//! The terminal belongs to the game screen while it runs, so events go to
//! ~/.cyberflap/cyber-flap.log instead of stderr. The filter is read from
//! `CYBERFLAP_LOG` (same syntax as `RUST_LOG`) and defaults to `info`.

use crate::core::constants::LOG_FILTER_ENV;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(default))
}

/// Install a global subscriber appending plain-text lines to `path`.
///
/// Calling this twice is harmless; the second call keeps the first
/// subscriber.
pub fn init_file_logging(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

/// Install a global subscriber writing to stderr (headless tools).
/// `default` is the filter used when `CYBERFLAP_LOG` is unset.
pub fn init_stderr_logging(default: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter(default))
        .with_writer(io::stderr)
        .try_init();
}
