// src/errors.rs

//! Crate-wide error type and result alias.
//!
//! Command failures are *not* errors: a non-zero exit code or a failed
//! launch is a [`CommandOutcome`](crate::types::CommandOutcome) consumed by
//! the sequencing loop. This type only covers conditions that end the
//! program itself.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunlinesError {
    /// Bad invocation. `main` prints the usage text and exits normally.
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, RunlinesError>;
