//! Tracing subscriber setup
//!
//! The editor owns the terminal while it runs, so log output can only go to a
//! file. Without a log file no subscriber is installed and every `tracing`
//! macro is a no-op.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Environment variable naming the log file when `--log` is not given
pub const LOG_FILE_ENV: &str = "TILDE_LOG_FILE";
/// Environment variable holding the filter directives (default `debug`)
pub const LOG_FILTER_ENV: &str = "TILDE_LOG";

/// Pick the log file: the command line wins over the environment.
pub fn log_path(cli_path: Option<&Path>) -> Option<PathBuf> {
    cli_path
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from))
}

/// Filter from `TILDE_LOG`, falling back to `debug`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new("debug"))
}

/// Build a subscriber writing plain (non-ANSI) lines to `log_file`.
pub fn build_subscriber(
    log_file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_writer(Arc::new(log_file))
        .with_ansi(false);

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}

/// Install the global subscriber logging to `path`.
pub fn init(path: &Path) -> io::Result<()> {
    let log_file = File::create(path)?;
    build_subscriber(log_file, env_filter())
        .try_init()
        .map_err(io::Error::other)
}
