//! The public error taxonomy.
//!
//! Every operation returns [`KoreanBotsError`]. The variants keep the
//! failure kinds apart so that callers can decide what to do next:
//!
//! - [`KoreanBotsError::Transport`]: no HTTP response was obtained
//! - [`KoreanBotsError::RequestFailed`]: the API reported a failure
//! - [`KoreanBotsError::InvalidDataReceived`]: success status, undecodable body
//! - [`KoreanBotsError::NoDataReceived`]: success, but the payload was absent
//! - [`KoreanBotsError::UnsupportedOperation`]: not offered by the API version
//!
//! # Example
//!
//! ```rust,ignore
//! use koreanbots::KoreanBotsError;
//!
//! match client.bot_info("653534001742741552").await {
//!     Ok(bot) => println!("{} has {} votes", bot.name, bot.votes),
//!     Err(KoreanBotsError::RequestFailed(failure)) if failure.code == 404 => {
//!         println!("no such bot");
//!     }
//!     Err(e) if e.is_retryable() => println!("try again later: {e}"),
//!     Err(e) => println!("error: {e}"),
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clients::HttpError;
use crate::config::{ApiVersion, Operation};
use crate::error::ConfigError;

/// A failure reported by the API, or synthesized from a status code.
///
/// # Example
///
/// ```rust
/// use koreanbots::RequestFailure;
///
/// let failure = RequestFailure::from_status(503, 2);
/// assert_eq!(failure.code, 503);
/// assert_eq!(failure.to_string(), "Request failed with message: Request failed with HTTP status 503");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("Request failed with message: {message}")]
pub struct RequestFailure {
    /// Short error message.
    pub message: String,
    /// Detailed, field-level error messages, if any.
    pub errors: Option<Vec<String>>,
    /// Status code of the failure; 0 when no response was received.
    pub code: u16,
    /// API version the request was sent to.
    pub version: u8,
}

impl RequestFailure {
    /// Synthesizes a failure from a bare status code.
    #[must_use]
    pub fn from_status(code: u16, version: u8) -> Self {
        Self {
            message: format!("Request failed with HTTP status {code}"),
            errors: None,
            code,
            version,
        }
    }

    /// Returns `true` for 5xx codes.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.code >= 500 && self.code <= 599
    }
}

/// Error type for every client operation.
#[derive(Debug, Error)]
pub enum KoreanBotsError {
    /// The request never produced an HTTP response.
    #[error("Transport error: {source}")]
    Transport {
        /// The underlying transport failure.
        #[source]
        source: HttpError,
        /// The API version the request was sent to.
        version: ApiVersion,
    },

    /// The server responded with a failure status or logical error code.
    #[error(transparent)]
    RequestFailed(#[from] RequestFailure),

    /// The server reported success but the body did not match the expected
    /// schema. The API may have changed or misbehaved.
    #[error("Request succeeded (status {code}) but the response body is invalid: {source}")]
    InvalidDataReceived {
        /// The decode failure.
        #[source]
        source: serde_json::Error,
        /// The HTTP status of the response.
        code: u16,
    },

    /// The server reported success but sent no payload for an operation
    /// that requires one.
    #[error("Request succeeded but no data was received for {operation}")]
    NoDataReceived {
        /// The operation that expected a payload.
        operation: Operation,
    },

    /// The configured API version does not offer this operation. No request
    /// was sent.
    #[error("{operation} is not supported on API {version}")]
    UnsupportedOperation {
        /// The operation that was called.
        operation: Operation,
        /// The configured API version.
        version: ApiVersion,
    },

    /// The client could not be constructed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl KoreanBotsError {
    /// Returns `true` if no HTTP response was obtained.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Returns `true` if repeating the call might succeed: transport
    /// failures and 5xx responses.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Transport { source, .. } => matches!(source, HttpError::Network(_)),
            Self::RequestFailed(failure) => failure.is_server_error(),
            _ => false,
        }
    }

    /// Returns the failure as a [`RequestFailure`].
    ///
    /// Transport errors are expressed with code 0 and the transport's
    /// message. Other kinds return `None`.
    #[must_use]
    pub fn request_failure(&self) -> Option<RequestFailure> {
        match self {
            Self::RequestFailed(failure) => Some(failure.clone()),
            Self::Transport { source, version } => Some(RequestFailure {
                message: source.to_string(),
                errors: None,
                code: 0,
                version: version.number(),
            }),
            _ => None,
        }
    }

    /// Returns the reported status code, if the error carries one.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::RequestFailed(failure) => Some(failure.code),
            Self::InvalidDataReceived { code, .. } => Some(*code),
            _ => None,
        }
    }
}
