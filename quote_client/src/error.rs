//! Errors surfaced by the client binary.
use std::io;

use quote_common::QuoteError;
use thiserror::Error;

/// Client-level failure: a store/sync error or a process-level problem.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Failure from the quote store, storage or endpoint.
    #[error(transparent)]
    Quote(#[from] QuoteError),

    /// Reading or writing an import/export file.
    #[error("File error: {0}")]
    Io(#[from] io::Error),

    /// Installing the Ctrl+C handler failed.
    #[error("Signal handler error: {0}")]
    Signal(#[from] ctrlc::Error),
}
