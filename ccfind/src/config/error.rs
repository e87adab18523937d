//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building the workspace configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `HOME` is unset or empty and no explicit workspace root was configured.
    #[error("Could not determine home directory")]
    MissingHome,

    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in the config file.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// Missing required file.
    #[error("Missing required file: {path}")]
    MissingFile { path: String },
}
