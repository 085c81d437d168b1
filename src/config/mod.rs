//! Configuration types for the koreanbots client.
//!
//! # Overview
//!
//! - [`KoreanBotsConfig`]: credentials, API version and transport settings
//! - [`KoreanBotsConfigBuilder`]: a builder for [`KoreanBotsConfig`]
//! - [`BotId`] / [`BotToken`]: validated credential newtypes
//! - [`ApiHost`]: the validated API host (without version segment)
//! - [`ApiVersion`] / [`Operation`]: version selection and capability queries
//!
//! # Example
//!
//! ```rust
//! use koreanbots::{ApiVersion, BotId, BotToken, KoreanBotsConfig};
//!
//! let config = KoreanBotsConfig::builder()
//!     .bot_id(BotId::new("653534001742741552").unwrap())
//!     .token(BotToken::new("my-token").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.api_version(), ApiVersion::V2);
//! ```

mod newtypes;
mod version;

pub use newtypes::{ApiHost, BotId, BotToken};
pub use version::{ApiVersion, Operation};

use std::sync::Arc;

use crate::codec::{Codec, JsonCodec};
use crate::error::ConfigError;

/// Configuration for a koreanbots client.
///
/// The configuration is immutable once built. It is `Clone`, `Send` and
/// `Sync`; the codec is shared behind an `Arc`.
#[derive(Clone, Debug)]
pub struct KoreanBotsConfig {
    bot_id: BotId,
    token: BotToken,
    api_version: ApiVersion,
    api_host: ApiHost,
    codec: Arc<dyn Codec>,
    user_agent_prefix: Option<String>,
}

impl KoreanBotsConfig {
    /// Creates a new builder for constructing a `KoreanBotsConfig`.
    #[must_use]
    pub fn builder() -> KoreanBotsConfigBuilder {
        KoreanBotsConfigBuilder::new()
    }

    /// Returns the id of the bot this client acts for.
    #[must_use]
    pub const fn bot_id(&self) -> &BotId {
        &self.bot_id
    }

    /// Returns the API token.
    #[must_use]
    pub const fn token(&self) -> &BotToken {
        &self.token
    }

    /// Returns the selected API version.
    #[must_use]
    pub const fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the codec used for request and response bodies.
    #[must_use]
    pub fn codec(&self) -> &Arc<dyn Codec> {
        &self.codec
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify KoreanBotsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KoreanBotsConfig>();
};

/// Builder for [`KoreanBotsConfig`].
///
/// `bot_id` and `token` are required.
///
/// # Defaults
///
/// - `api_version`: [`ApiVersion::latest`]
/// - `api_host`: `https://koreanbots.dev/api`
/// - `codec`: [`JsonCodec`]
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct KoreanBotsConfigBuilder {
    bot_id: Option<BotId>,
    token: Option<BotToken>,
    api_version: Option<ApiVersion>,
    api_host: Option<ApiHost>,
    codec: Option<Arc<dyn Codec>>,
    user_agent_prefix: Option<String>,
}

impl KoreanBotsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bot id (required).
    #[must_use]
    pub fn bot_id(mut self, bot_id: BotId) -> Self {
        self.bot_id = Some(bot_id);
        self
    }

    /// Sets the API token (required).
    #[must_use]
    pub fn token(mut self, token: BotToken) -> Self {
        self.token = Some(token);
        self
    }

    /// Sets the API version.
    #[must_use]
    pub const fn api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = Some(version);
        self
    }

    /// Sets the API host. The version path is appended automatically.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Replaces the default JSON codec.
    #[must_use]
    pub fn codec(mut self, codec: Arc<dyn Codec>) -> Self {
        self.codec = Some(codec);
        self
    }

    /// Sets a prefix for the `User-Agent` header.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`KoreanBotsConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `bot_id` or `token`
    /// is not set.
    pub fn build(self) -> Result<KoreanBotsConfig, ConfigError> {
        let bot_id = self
            .bot_id
            .ok_or(ConfigError::MissingRequiredField { field: "bot_id" })?;
        let token = self
            .token
            .ok_or(ConfigError::MissingRequiredField { field: "token" })?;

        Ok(KoreanBotsConfig {
            bot_id,
            token,
            api_version: self.api_version.unwrap_or_else(ApiVersion::latest),
            api_host: self.api_host.unwrap_or_default(),
            codec: self.codec.unwrap_or_else(|| Arc::new(JsonCodec)),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
