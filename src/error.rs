//! Error types for hello-sum
//!
//! The fixed sequence can never fail to sum. These errors only surface once
//! a caller supplies its own numbers or the output sink goes away.

use std::num::ParseIntError;
use thiserror::Error;

/// Errors that can occur while building or writing a report
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid number '{input}': {source}")]
    InvalidNumber {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Sum overflowed at element {index}")]
    Overflow { index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for hello-sum operations
pub type Result<T> = std::result::Result<T, Error>;
