//! Cross-cutting error types for taskseed.
//!
//! Generation, sink, and audit errors live in `taskseed-gen`; configuration
//! errors in `taskseed-config`. The binary converges all of them into `anyhow`.

use thiserror::Error;

/// Errors that can be raised by any taskseed crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (empty names, malformed records).
    #[error("Validation error: {0}")]
    Validation(String),

    /// A document kind was requested by a name that does not exist.
    #[error("Unknown document kind: {0}")]
    UnknownDocument(String),

    /// JSON encoding or decoding failed.
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}
