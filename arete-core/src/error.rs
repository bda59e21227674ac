//! Error types for arete-core

use thiserror::Error;

/// Main error type for the arete-core library
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// A date string that does not parse as `YYYY-MM-DD`
    #[error("invalid date string {input:?}: {message}")]
    Date { input: String, message: String },

    /// Habit not found
    #[error("habit not found: {0}")]
    HabitNotFound(String),

    /// Category not found
    #[error("category not found: {0}")]
    CategoryNotFound(String),
}

/// Result type alias for arete-core
pub type Result<T> = std::result::Result<T, Error>;
