use crate::error::ConfigError;
use crate::settings::LoggingSettings;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// File name prefix of the daily-rolling log.
pub const LOG_FILE_PREFIX: &str = "reports.log";

/// Installs the global `tracing` subscriber.
///
/// Events go to stderr and, when `settings.directory` is set, to a daily-rolling
/// file as well. `RUST_LOG` overrides `settings.filter`. The returned guard must
/// be kept alive until shutdown so buffered file output is flushed.
pub fn init_tracing(settings: &LoggingSettings) -> Result<Option<WorkerGuard>, ConfigError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    let (file_layer, guard) = match &settings.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| ConfigError::LoggingError(e.to_string()))?;

    Ok(guard)
}
