//! File logging.
//!
//! The TUI owns the terminal, so log lines go to
//! `<data dir>/chronicle/logs/chronicle.log` through a non-blocking writer.
//! `RUST_LOG` overrides the level given on the command line.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

pub const LOG_FILE_NAME: &str = "chronicle.log";

/// Keep alive for the whole run. Dropping it flushes the log file.
pub struct LoggingGuard {
    _file_guard: WorkerGuard,
    pub log_path: PathBuf,
}

/// Default log directory.
pub fn log_dir() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "chronicle")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("logs"))
}

pub fn init(level: &str) -> Result<LoggingGuard> {
    init_in(&log_dir()?, level)
}

/// Install the global subscriber, writing to `dir`.
pub fn init_in(dir: &Path, level: &str) -> Result<LoggingGuard> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let log_path = dir.join(LOG_FILE_NAME);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let (writer, file_guard) = tracing_appender::non_blocking(file);

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("Invalid log level: {level}"))?;

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Logging already initialized")?;

    tracing::info!(log_path = %log_path.display(), "Logging initialized");

    Ok(LoggingGuard {
        _file_guard: file_guard,
        log_path,
    })
}
