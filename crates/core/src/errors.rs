//! Core error types for the activity log.
//!
//! This module defines store-agnostic error types. Failures from the hosted
//! database client (HTTP status codes, error bodies) are converted to these
//! types by the storage layer.

use thiserror::Error;

use crate::activities::ActivityError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the activity log.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("Activity error: {0}")]
    Activity(#[from] ActivityError),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),

    #[error("Missing configuration key: {0}")]
    MissingConfigKey(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Store-agnostic error type for record store operations.
///
/// All details are carried as strings so the storage layer can convert
/// client-specific errors (reqwest, HTTP error bodies) into this format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The request never produced a response (DNS, TLS, connection reset, timeout).
    #[error("Request to record store failed: {0}")]
    RequestFailed(String),

    /// The store rejected the credentials or the integration lacks access.
    #[error("Record store rejected credentials: {0}")]
    Unauthorized(String),

    /// The addressed record or container does not exist.
    #[error("Record not found: {0}")]
    NotFound(String),

    /// The store rejected the request body, usually a property schema mismatch.
    #[error("Record store rejected request: {0}")]
    InvalidRequest(String),

    #[error("Record store rate limit exceeded: {0}")]
    RateLimited(String),

    #[error("Record store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with something that could not be interpreted.
    #[error("Unexpected record store response: {0}")]
    UnexpectedResponse(String),
}

/// Errors raised while validating caller input, before the store is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("{0}")]
    InvalidInput(String),
}
