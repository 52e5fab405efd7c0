//! Error types for the nutri_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for nutri_core operations
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

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Catalog validation error
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    /// A catalog entry cannot be scaled (e.g. zero serving size)
    #[error("Invalid catalog entry: {0}")]
    InvalidCatalogEntry(String),

    /// Quantity that cannot produce finite nutrient values
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// No catalog entry matched the query
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    /// Log index outside the current log
    #[error("No log entry at index {index} (log has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Session/history state error
    #[error("State error: {0}")]
    State(String),
}
