//! Error types
//!
//! Domain errors that callers match on. Application-level
//! propagation uses `anyhow` on top of these.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Delay is not a finite, non-negative number of seconds
    #[error("invalid delay '{0}': expected a non-negative number of seconds")]
    InvalidDelay(String),

    /// Writing a key command to the output stream failed
    #[error("failed to write key command: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
