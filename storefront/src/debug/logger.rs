//! Logging initialization

use super::config::LogConfig;
use std::fs;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Initialize the logging system
///
/// Sets up:
/// - stderr output, human-readable or JSON lines
/// - an optional daily-rotated file under `STOREFRONT_LOG_DIR`
/// - non-blocking file writes so request tasks never wait on disk
///
/// Calling this twice is harmless; the second call leaves the first
/// subscriber in place.
pub fn init() {
    init_with(&LogConfig::from_env());
}

pub fn init_with(config: &LogConfig) {
    let env_filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new(super::config::DEFAULT_LOG_LEVEL));

    // Source locations only when someone is debugging
    let verbose = config.is_debug_enabled();

    let stderr_layer = if config.json {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(verbose)
            .with_line_number(verbose)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(verbose)
            .with_line_number(verbose)
            .boxed()
    };

    let file_layer = config.log_dir.as_ref().and_then(|dir| {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Warning: Failed to create log directory: {}", e);
            return None;
        }

        let file_appender = tracing_appender::rolling::daily(dir, "storefront.log");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        // Keep the guard alive for the lifetime of the program
        std::mem::forget(guard);

        Some(
            fmt::layer()
                .with_writer(non_blocking)
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .with_ansi(false) // No ANSI codes in log files
                .boxed(),
        )
    });

    let result = tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init();

    if result.is_ok() {
        tracing::info!(
            log_level = %config.log_level,
            log_dir = ?config.log_dir,
            json = config.json,
            "Logging initialized"
        );
    }
}
