//! Error types for the aircover pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for aircover operations.
#[derive(Error, Debug)]
pub enum AircoverError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Configuration-related errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Dataset loading errors. All of these are fatal at startup: the process
/// must not answer queries over a table that failed to load.
#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed record in {path}: {source}")]
    Record {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Duplicate sortie id '{0}' in mapping table")]
    DuplicateRid(String),

    #[error("Negative duration {seconds} for track '{track_id}'")]
    NegativeDuration { track_id: String, seconds: f64 },
}

/// Chart rendering errors.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Chart drawing failed: {0}")]
    Draw(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),
}

/// Result type alias for aircover operations.
pub type Result<T> = std::result::Result<T, AircoverError>;
