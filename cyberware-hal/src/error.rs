//! Peripheral errors

use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Peripheral not available: {0}")]
    Unavailable(String),

    #[error("Unique-ID truncated: expected at least {expected} bytes, got {actual}")]
    Truncated {
        expected: usize,
        actual: usize,
    },

    #[error("Malformed hardware data: {0}")]
    Malformed(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
