//! Error handling for the placement prep application

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacementPrepError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Analysis failed: {0}")]
    AnalysisFailed(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, PlacementPrepError>;

/// Convert anyhow errors to our custom error type
impl From<anyhow::Error> for PlacementPrepError {
    fn from(err: anyhow::Error) -> Self {
        PlacementPrepError::AnalysisFailed(err.to_string())
    }
}
