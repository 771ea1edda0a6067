//! Tracing subscriber setup.
//!
//! The editor owns the terminal while it runs, so anything more verbose than
//! warnings should go to a file: pass `--log-file PATH` or set `PARLEY_LOG`.
//! `RUST_LOG` overrides the default level either way.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Environment variable naming a log file when `--log-file` is absent.
pub const LOG_FILE_ENV: &str = "PARLEY_LOG";

/// Resolve the log destination: explicit path first, then `PARLEY_LOG`.
pub fn log_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| std::env::var_os(LOG_FILE_ENV).map(PathBuf::from))
        .filter(|path| !path.as_os_str().is_empty())
}

fn filter_for(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global subscriber.
///
/// Later calls are no-ops, so tests may call this freely.
///
/// # Errors
/// Returns an error if the log file cannot be opened for appending.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file_path(log_file) else {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter_for("warn"))
            .with_writer(std::io::stderr)
            .with_target(false)
            .try_init();
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter_for("parley=debug"))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init();
    tracing::info!(path = %path.display(), "logging to file");
    Ok(())
}
