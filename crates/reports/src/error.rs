use thiserror::Error;

/// A failure reported by a `DataSource`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SourceError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Trading server unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid group mask '{0}'")]
    InvalidMask(String),

    #[error("No conversion rate from {from} to {to}")]
    Conversion { from: String, to: String },
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Data source error: {0}")]
    Source(#[from] SourceError),

    #[error("An error occurred during JSON serialization/deserialization: {0}")]
    Json(#[from] serde_json::Error),
}
