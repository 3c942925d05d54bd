//! Error types for the elitefit_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for elitefit_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A required measurement field was missing or not a positive number
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Plan catalog validation error
    #[error("Plan catalog error: {0}")]
    PlanCatalog(String),

    /// Profile store error
    #[error("Profile error: {0}")]
    Profile(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
