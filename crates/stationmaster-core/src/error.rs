// Rust guideline compliant 2026-08-23

//! Error types for the Stationmaster core library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Stationmaster operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Stationmaster operations.
///
/// Every variant names the entity it concerns (config file path or ticket
/// name). All errors are terminal for the current invocation; none are
/// retried.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error while reading or writing the boarding config file.
    #[error("IO error on {}: {source}", path.display())]
    Io {
        /// Path of the file the operation touched.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The boarding config document is malformed or schema-incompatible.
    #[error("malformed boarding config {}: {message}", path.display())]
    Parse {
        /// Path of the offending document.
        path: PathBuf,
        /// What went wrong while parsing.
        message: String,
    },

    /// The boarding config file does not exist.
    #[error("boarding config file not found: {}", path.display())]
    FileNotFound {
        /// Path that was looked up.
        path: PathBuf,
    },

    /// Refused to initialize over an existing boarding config file.
    #[error("boarding config file already exists: {}", path.display())]
    AlreadyInitialized {
        /// Path that already holds a document.
        path: PathBuf,
    },

    /// No boarding ticket with the given name exists in the document.
    #[error("no boarding ticket named '{0}'")]
    TicketNotFound(String),

    /// A boarding ticket with the given name already exists.
    #[error("boarding ticket '{0}' already exists")]
    DuplicateTicket(String),

    /// A field value failed validation.
    #[error("invalid {field}: {message}")]
    Validation {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl Error {
    /// Builds an IO error carrying the path it occurred on.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Builds a validation error for a named field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}
