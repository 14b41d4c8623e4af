//! Error types for sense-eval
//!
//! Configuration problems (missing columns, unknown mode) are fatal and
//! surface before any record is classified.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// sense-eval error types
#[derive(Error, Debug)]
pub enum Error {
    /// Required columns absent from the input table
    #[error("Missing required columns: {}\nCheck the input header and the selected mode", missing.join(", "))]
    MissingColumns {
        /// Names of every required column that was not found
        missing: Vec<String>,
    },

    /// Mode selector outside the supported set
    #[error("Unknown mode: {0} (expected one of: transformers, fasttext)")]
    UnknownMode(String),

    /// Input file has no header row
    #[error("Input table is empty: no header row found")]
    EmptyInput,

    /// Delimited text parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
