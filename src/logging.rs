//! Logging setup on the tracing ecosystem.
//!
//! Records go to a daily-rotated file under the platform local data
//! directory so the CLI's stdout stays clean for actual output. Levels
//! come from `RUST_LOG`, with a conservative default when unset.

use std::path::PathBuf;

use anyhow::Context;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Filter applied when `RUST_LOG` is not set.
const DEFAULT_LOG_FILTER: &str = "sonar=info,warn";

/// Initialize the global tracing subscriber.
///
/// Creates the log directory if needed (`sonar/logs` under the platform
/// local data dir, e.g. `~/.local/share/sonar/logs/` on Linux) and
/// installs a fmt layer writing structured, ANSI-free records with
/// target, thread id, and file/line information.
///
/// # Errors
///
/// Returns an error if the log directory cannot be determined or
/// created, or if a global subscriber is already installed.
pub fn init() -> anyhow::Result<()> {
    let log_dir = resolve_log_directory()?;
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, "sonar.log");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Sonar starting up");
    tracing::debug!(log_dir = %log_dir.display(), "Log directory");

    Ok(())
}

/// Where log files are written, for surfacing to users.
pub fn log_directory() -> Option<PathBuf> {
    resolve_log_directory().ok()
}

fn resolve_log_directory() -> anyhow::Result<PathBuf> {
    let base = dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("could not determine the local data directory"))?;
    Ok(base.join("sonar").join("logs"))
}

/// Log a clean shutdown; call before the process exits.
pub fn shutdown() {
    tracing::info!("Sonar shutting down");
}
