//! Error types for the ingestion crate.

use map_common::MapError;
use thiserror::Error;

/// Errors that can occur while loading frame inputs.
#[derive(Error, Debug)]
pub enum IngestionError {
    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid boundary row at line {line}: {message}")]
    InvalidBoundary { line: u64, message: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unexpected SAIPE response: {0}")]
    InvalidResponse(String),

    #[error("No Census API key configured (set CENSUS_API_KEY)")]
    MissingApiKey,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Map(#[from] MapError),
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestionError>;
