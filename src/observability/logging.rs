use std::fs;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ValidatorError};

/// Initializes console + daily-rolling JSON file logging under `log_dir`.
///
/// The returned guard flushes the file writer on drop; hold it for the
/// lifetime of the process. An unusable `log_dir` or an already-installed
/// global subscriber is reported as a configuration error.
pub fn init_logging(log_dir: &str) -> Result<WorkerGuard> {
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender(log_dir)?);

    let file_layer = fmt::layer().json().with_writer(non_blocking_writer);

    let console_layer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stdout);

    // Respect RUST_LOG if set
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("address_validator=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(|e| ValidatorError::Config(format!("Failed to install log subscriber: {}", e)))?;

    Ok(guard)
}

fn file_appender(log_dir: &str) -> Result<RollingFileAppender> {
    fs::create_dir_all(log_dir).map_err(|e| {
        ValidatorError::Config(format!("Failed to create log directory '{}': {}", log_dir, e))
    })?;

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("address-validator.log")
        .build(log_dir)
        .map_err(|e| ValidatorError::Config(format!("Failed to open log file in '{}': {}", log_dir, e)))
}
