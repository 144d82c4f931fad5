//! Error types for configuration operations.
//!
//! This module defines the error types that can occur during configuration
//! loading, parsing, and validation.

use std::path::PathBuf;

/// Errors that can occur during configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read a configuration file.
    #[error("failed to read config file at {path}: {source}")]
    ReadFile {
        /// The path that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a configuration file.
    #[error("failed to write config file at {path}: {source}")]
    WriteFile {
        /// The path that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse JSON5 configuration.
    #[error("failed to parse config: {0}")]
    ParseJson5(#[from] serde_json5::Error),

    /// Failed to serialize configuration to JSON.
    #[error("failed to serialize config: {0}")]
    SerializeJson(#[from] serde_json::Error),

    /// A key pattern could not be parsed.
    #[error("invalid key '{pattern}': {reason}")]
    InvalidKey {
        /// The pattern as written.
        pattern: String,
        /// Why it was rejected.
        reason: String,
    },

    /// An action has no keys bound to it.
    #[error("no keys bound to action '{action}'")]
    EmptyBinding {
        /// The action name.
        action: &'static str,
    },

    /// The same key triggers two actions in the same context.
    #[error("key '{key}' is bound to both '{first}' and '{second}'")]
    ConflictingBinding {
        /// The shared key.
        key: String,
        /// The first action using the key.
        first: &'static str,
        /// The second action using the key.
        second: &'static str,
    },

    /// A form action is bound to a key that types text into the form.
    #[error("key '{key}' cannot be bound to form action '{action}': it types text")]
    TextFormBinding {
        /// The offending key.
        key: String,
        /// The form action.
        action: &'static str,
    },

    /// Failed to determine home directory.
    #[error("could not determine home directory")]
    NoHomeDirectory,
}

/// A specialized Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
