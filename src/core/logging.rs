//! Logging Initialization
//!
//! Sets up `tracing` for the binary:
//! - Pretty human-readable output on stderr (stdout carries the JSON results)
//! - JSON daily-rolling log files in the user data directory
//! - `log` crate records bridged into `tracing`

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE_NAME: &str = "dialogprep.log";

/// Filter from `RUST_LOG`, defaulting to `info`.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Directory for rolling log files: `<data_local_dir>/dialogprep/logs`.
pub fn log_dir() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("dialogprep").join("logs"))
}

/// Initialize the logging system.
///
/// This sets up:
/// 1. A stderr logger (pretty formatted).
/// 2. A file logger (JSON formatted) in the user data directory.
/// 3. Redirects standard `log` crate events to `tracing`.
///
/// Falls back to [`init_stderr_only`] when no log directory can be created.
/// Returns a `WorkerGuard` which must be kept alive for the duration of the
/// application so buffered logs are flushed on shutdown.
pub fn init() -> Option<WorkerGuard> {
    let Some(log_dir) = log_dir() else {
        init_stderr_only();
        return None;
    };
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create logs directory {}: {}", log_dir.display(), e);
        init_stderr_only();
        return None;
    }

    // Daily rotation, no size limit
    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = env_filter();

    // File Layer: JSON format for easy parsing/ingestion
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_thread_ids(true)
        .with_target(true)
        .with_filter(filter.clone());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .pretty()
        .with_filter(filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    bridge_log_records();

    log::info!(
        "Logging initialized. Writing to: {:?} (daily rolling)",
        log_dir.join(LOG_FILE_NAME)
    );

    Some(guard)
}

/// Initialize logging to stderr only, without log files.
pub fn init_stderr_only() {
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .pretty()
        .with_filter(env_filter());

    tracing_subscriber::registry().with(stderr_layer).init();

    bridge_log_records();
}

/// `SubscriberInitExt::init` already installs the bridge when
/// tracing-subscriber's `tracing-log` feature is on.
fn bridge_log_records() {
    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::debug!("LogTracer not installed: {}", e);
    }
}
