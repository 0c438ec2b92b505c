//! Log setup
//!
//! The terminal belongs to the game, so logs only ever go to a file. Logging
//! is off unless `MASTERMIND_LOG` or the `log_file` config key names a file.
//! `RUST_LOG` controls the filter and defaults to `info`.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable naming the log file; takes precedence over config
pub const LOG_ENV: &str = "MASTERMIND_LOG";

/// Pick the log file: the environment wins over the config file
#[must_use]
pub fn log_path(configured: Option<&Path>) -> Option<PathBuf> {
    std::env::var_os(LOG_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
        .or_else(|| configured.map(Path::to_path_buf))
}

/// Initialize tracing with file output, if a log file is configured.
pub fn init_tracing(configured: Option<&Path>) {
    let Some(path) = log_path(configured) else {
        return;
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("Warning: Failed to open log file {}: {e}", path.display());
            return;
        }
    };

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();
}
