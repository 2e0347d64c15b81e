//! Core error types for the Proreview application.
//!
//! This module defines backend-agnostic error types. Transport-specific errors
//! (HTTP status codes, body decoding) are converted to these types by the
//! backend adapter crate.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the catalog application.
///
/// Aggregation never produces one of these; they only come from reading the
/// hosted backend or from rejecting caller input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Backend operation failed: {0}")]
    Backend(#[from] BackendError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors raised while talking to the hosted backend.
///
/// Details are kept as strings so this crate does not depend on the HTTP
/// client used by the adapter.
#[derive(Error, Debug)]
pub enum BackendError {
    /// The request could not be sent or the backend answered with an error.
    #[error("Backend request failed: {0}")]
    RequestFailed(String),

    /// The backend rejected our credentials.
    #[error("Backend rejected credentials: {0}")]
    Unauthorized(String),

    /// The requested table or row does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The backend answered but the body was not what we expected.
    #[error("Invalid backend response: {0}")]
    InvalidResponse(String),
}

/// Validation errors for caller input.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
