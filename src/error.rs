//! Error types for docready operations.
//!
//! This module defines [`ReadyError`], the error type for service setup, and
//! a [`Result`] type alias for convenience.
//!
//! Probing itself never produces an error: every failure during a probe
//! (missing binary, failed spawn, non-zero exit, unparseable output) folds
//! into a reportable [`ToolStatus`](crate::probe::ToolStatus). The variants
//! here cover configuration and server startup faults only.

use thiserror::Error;

/// Core error type for docready operations.
#[derive(Debug, Error)]
pub enum ReadyError {
    /// Bind address could not be parsed as a socket address.
    #[error("Invalid bind address '{addr}': {message}")]
    InvalidBindAddr { addr: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for docready operations.
pub type Result<T> = std::result::Result<T, ReadyError>;
