use crate::error::ConfigError;
use serde::Deserialize;
use std::path::PathBuf;
use table_builder::ColumnMode;

/// The root configuration structure for the report generator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub report: ReportSettings,
    pub logging: LoggingSettings,
}

/// Presentation parameters of the pending trades report.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    /// Name of the table, used by the renderer to key saved layouts.
    pub table_name: String,
    /// Text of the modal header.
    pub title: String,
    /// Heading rendered above the table.
    pub heading: String,
    /// Currency all money columns are converted into.
    pub target_currency: String,
    /// `chrono` format string for the open-time column.
    pub timestamp_format: String,
    /// Offset applied to epoch timestamps before formatting.
    pub utc_offset_secs: i32,
    pub column_mode: ColumnMode,
    pub modal_size: String,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            table_name: "PendingTradesReportTable".to_string(),
            title: "Pending Trades report".to_string(),
            heading: "Pending Trades Report".to_string(),
            target_currency: "USD".to_string(),
            timestamp_format: "%Y.%m.%d %H:%M:%S".to_string(),
            utc_offset_secs: 0,
            column_mode: ColumnMode::Legacy,
            modal_size: "xxxl".to_string(),
        }
    }
}

/// Where and how verbosely to log.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    pub filter: String,
    /// Directory for a daily-rolling log file. Stderr only when unset.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            directory: None,
        }
    }
}

const MAX_OFFSET_SECS: i32 = 24 * 60 * 60;

impl Config {
    /// Checks the values deserialization alone can't rule out.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let report = &self.report;

        if report.table_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "report.table_name must not be empty".to_string(),
            ));
        }

        let currency = &report.target_currency;
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ConfigError::ValidationError(format!(
                "report.target_currency must be a 3-letter ISO code, got '{currency}'"
            )));
        }

        if report.utc_offset_secs.unsigned_abs() >= MAX_OFFSET_SECS.unsigned_abs() {
            return Err(ConfigError::ValidationError(format!(
                "report.utc_offset_secs must be within ±{MAX_OFFSET_SECS}, got {}",
                report.utc_offset_secs
            )));
        }

        Ok(())
    }
}
