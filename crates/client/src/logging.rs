//! Tracing subscriber setup.

use std::fs;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ClientConfig;

pub const LOG_FILE_NAME: &str = "giftguide.log";

/// Installs the global subscriber.
///
/// Logs go to stderr so they never mix with command output. The filter comes
/// from `RUST_LOG` and defaults to `warn`. When file logging is enabled, the
/// same events are also written to `<log_dir>/giftguide.log`; the returned
/// guard must be held until exit so buffered lines are flushed.
pub fn setup_logging(config: &ClientConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let (file_layer, guard) = if config.log_to_file {
        fs::create_dir_all(&config.log_dir).with_context(|| {
            format!("Failed to create log directory: {}", config.log_dir.display())
        })?;

        let file_appender = tracing_appender::rolling::never(&config.log_dir, LOG_FILE_NAME);
        let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);
        let layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_file)
            .with_ansi(false);
        (Some(layer), Some(guard))
    } else {
        (None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;

    if config.log_to_file {
        tracing::info!(
            "Log file: {}",
            config.log_dir.join(LOG_FILE_NAME).display()
        );
    }

    Ok(guard)
}
