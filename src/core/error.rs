//! Error types for the application

use thiserror::Error;

/// Application-wide error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Stored device list is corrupt: {0}")]
    PersistenceCorrupt(String),

    #[error("Unknown appliance type: {0}")]
    UnknownAppliance(String),

    #[error("Unknown label field: {0}")]
    UnknownField(String),
}

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;
