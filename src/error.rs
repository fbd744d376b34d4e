//! Error types for the Outofbox API SDK.
//!
//! This module contains the two error types that cross the public boundary:
//!
//! - [`ApiError`]: a service failure (malformed response data, an error
//!   envelope in the body, or a transport failure). Carries the message
//!   reported by the API and an optional numeric error code.
//! - [`OperationNotFoundError`]: a caller bug; an undefined logical
//!   operation name was passed to the dynamic dispatcher. Deliberately not
//!   an [`ApiError`], so callers can tell a programming error apart from a
//!   service failure.
//!
//! [`ClientError`] unifies the two for the dynamic dispatch surface.
//!
//! # Example
//!
//! ```rust
//! use outofbox_sdk::ApiError;
//!
//! let error = ApiError::with_code("Product not available", 102);
//! assert_eq!(error.to_string(), "Product not available");
//! assert_eq!(error.code, Some(102));
//! ```

use thiserror::Error;

/// An error reported by (or on behalf of) the Outofbox API.
///
/// Raised for malformed JSON bodies, the success-path error envelope
/// (`{"code": …, "message": …}` in a 2xx body), the failure-path envelope
/// (`{"error": {"message": …, "code"?: …}}` on non-2xx responses), response
/// decode failures, and transport-level failures. Raw transport errors are
/// never surfaced directly; they are always translated into this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable error message from the API (or the decode stage).
    pub message: String,
    /// Numeric error code, when the API supplied one.
    pub code: Option<i64>,
}

impl ApiError {
    /// Creates an `ApiError` with a message and no code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Creates an `ApiError` with a message and a numeric code.
    pub fn with_code(message: impl Into<String>, code: i64) -> Self {
        Self {
            message: message.into(),
            code: Some(code),
        }
    }
}

/// Error returned when an undefined logical operation is dispatched.
///
/// This is a programming error on the caller's side, not a service failure,
/// and is therefore kept distinct from [`ApiError`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Operation [{name}] not found in [ApiClient].")]
pub struct OperationNotFoundError {
    /// The unresolved operation name.
    pub name: String,
}

/// Unified error type for the dynamic dispatch surface.
///
/// [`ApiClient::send_named`](crate::ApiClient::send_named) can fail either
/// because the service rejected the call ([`ClientError::Api`]) or because
/// the caller asked for an operation that does not exist
/// ([`ClientError::OperationNotFound`]).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The API reported a failure.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The requested operation name is not part of the operation catalog.
    #[error(transparent)]
    OperationNotFound(#[from] OperationNotFoundError),
}
