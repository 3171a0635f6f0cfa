use thiserror::Error;

/// swipe_stats error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord { row: usize, reason: String },

    #[error("Invalid input: {field}")]
    InvalidInput { field: String },

    #[error("Population is empty")]
    EmptyPopulation,

    #[error("Statement table is empty")]
    EmptyStatementTable,

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Fetch of {asset} failed: {message}")]
    FetchFailed { asset: String, message: String },

    #[error("Fetch cancelled: {0}")]
    Cancelled(String),
}

impl Error {
    pub fn invalid_record(row: usize, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            row,
            reason: reason.into(),
        }
    }

    pub fn invalid_input(field: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
        }
    }

    pub fn cancelled(asset: impl Into<String>) -> Self {
        Self::Cancelled(asset.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
