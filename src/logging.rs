use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs::File;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup logging with file and console output.
///
/// The log file is truncated on open so every run starts with a fresh log.
/// Console output keeps ANSI colors; the file layer writes plain text.
///
/// # Arguments
/// * `log_path` - Path of the log file (e.g. beside the executable)
///
/// # Returns
/// A guard that must be held for the duration of the program to keep logging active
pub fn setup_logging(log_path: &Utf8Path) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_file = File::create(log_path)
        .with_context(|| format!("Failed to create log file: {}", log_path))?;
    let (non_blocking, guard) = tracing_appender::non_blocking(log_file);

    // Default to info; RUST_LOG overrides for debugging
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true);

    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .init();

    tracing::info!("Logging initialized: file={}", log_path);

    Ok(guard)
}
