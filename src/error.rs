//! Configuration error types for the koreanbots client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that
//! invalid credentials or hosts are rejected before any request is made.
//!
//! # Example
//!
//! ```rust
//! use koreanbots::{BotId, ConfigError};
//!
//! let result = BotId::new("");
//! assert!(matches!(result, Err(ConfigError::EmptyBotId)));
//! ```

use thiserror::Error;

/// Errors that can occur while building a client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Bot id cannot be empty.
    #[error("Bot id cannot be empty. Please provide the Discord id of your bot.")]
    EmptyBotId,

    /// Token cannot be empty.
    #[error("Bot token cannot be empty. Please provide the token issued by koreanbots.dev.")]
    EmptyToken,

    /// API version is invalid.
    #[error("Invalid API version '{version}'. Expected '1', '2', 'v1' or 'v2'.")]
    InvalidApiVersion {
        /// The invalid version string that was provided.
        version: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// API host URL is invalid.
    #[error("Invalid API host '{url}'. Please provide a URL with scheme (e.g., 'https://koreanbots.dev/api').")]
    InvalidApiHost {
        /// The invalid URL that was provided.
        url: String,
    },

    /// The async runtime backing the blocking and callback forms could not be created.
    #[error("Failed to start the client runtime: {reason}")]
    RuntimeUnavailable {
        /// Description of the underlying I/O failure.
        reason: String,
    },
}
