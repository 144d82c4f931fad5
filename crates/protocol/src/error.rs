//! Error types for the kancli-protocol crate.

use thiserror::Error;

/// Errors that can occur when building protocol values.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// An item title was empty or only whitespace.
    #[error("invalid item title: title cannot be empty")]
    InvalidItemTitle,
}

/// A specialized Result type for protocol operations.
pub type Result<T> = std::result::Result<T, ProtocolError>;
