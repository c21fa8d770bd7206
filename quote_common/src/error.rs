//! Error types shared between the library and the client.
//!
//! The `QuoteError` enum unifies the failure cases of the quote store: rejected input,
//! storage I/O, malformed JSON and network trouble while talking to the remote endpoint,
//! allowing every crate to propagate a single error type.
use std::io;
use std::sync::PoisonError;

use thiserror::Error;

/// Unified error type shared by the library and the client.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// Rejected user input, e.g. an empty quote text or category.
    #[error("Validation error: {0}")]
    Validation(String),

    /// I/O error originating from the storage directory or an import/export file.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Malformed JSON in persisted state or in an imported file.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Fetch or post against the remote endpoint failed.
    #[error("Network error: {0}")]
    Network(String),

    /// Error indicating a poisoned mutex/lock was encountered.
    #[error("Mutex Lock Poisoned: {0}")]
    MutexLock(String),
}

impl From<reqwest::Error> for QuoteError {
    fn from(err: reqwest::Error) -> Self {
        QuoteError::Network(err.to_string())
    }
}

impl<T> From<PoisonError<T>> for QuoteError {
    fn from(err: PoisonError<T>) -> Self {
        QuoteError::MutexLock(err.to_string())
    }
}
