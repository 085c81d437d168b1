//! Transport-level error types.
//!
//! The transport only fails when no HTTP response could be obtained: the
//! request was malformed, its body could not be encoded, or the network call
//! itself failed. Non-2xx responses are returned as ordinary
//! [`HttpResponse`](crate::clients::HttpResponse) values and classified by
//! the response handler.
//!
//! # Example
//!
//! ```rust
//! use koreanbots::clients::InvalidHttpRequestError;
//!
//! let error = InvalidHttpRequestError::MissingBody {
//!     method: "post".to_string(),
//! };
//! assert_eq!(error.to_string(), "Cannot use post without specifying data.");
//! ```

use thiserror::Error;

/// Error returned when an HTTP request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A request body was provided without specifying the body type.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// The request body could not be encoded.
    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}
