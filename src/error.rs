//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Errors that do not implement `Clone` are wrapped in `Arc` so `AppError` stays cloneable.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Error writing the action output (e.g. a closed stdout pipe).
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// The host asked for an action this client does not provide.
    #[error("Unknown action '{0}' (expected one of: install, configure)")]
    UnknownAction(String),

    /// Error specific to CLI logic or argument handling.
    #[error("CLI Error: {0}")]
    Cli(String),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(Arc::new(err))
    }
}
