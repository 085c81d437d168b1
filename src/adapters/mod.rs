//! Per-version endpoint tables.
//!
//! An [`Adapter`] is chosen once, when the client is built, from the
//! configured [`ApiVersion`]. It maps each operation to an endpoint, attaches
//! the token header where the endpoint needs it, and decodes the response
//! through a [`ResponseHandler`](crate::response::ResponseHandler) set up with
//! the version's status policy.
//!
//! Operations a version does not offer fail with
//! [`KoreanBotsError::UnsupportedOperation`] before any request is built.

pub mod v1;
pub mod v2;

pub use v1::V1Adapter;
pub use v2::V2Adapter;

use crate::clients::{HttpClient, HttpError, HttpRequest, HttpResponse, InvalidHttpRequestError};
use crate::config::{ApiVersion, KoreanBotsConfig, Operation};
use crate::models::{self, Bot, SearchResult, User, Voted};
use crate::response::KoreanBotsError;

/// The adapter for the configured API version.
#[derive(Clone, Debug)]
pub enum Adapter {
    /// `/v1`.
    V1(V1Adapter),
    /// `/v2`.
    V2(V2Adapter),
}

impl Adapter {
    /// Builds the adapter for `config.api_version()`.
    #[must_use]
    pub fn new(config: &KoreanBotsConfig, http_client: HttpClient) -> Self {
        match config.api_version() {
            ApiVersion::V1 => Self::V1(V1Adapter::new(config, http_client)),
            ApiVersion::V2 => Self::V2(V2Adapter::new(config, http_client)),
        }
    }

    /// Returns the API version this adapter talks to.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        match self {
            Self::V1(_) => ApiVersion::V1,
            Self::V2(_) => ApiVersion::V2,
        }
    }

    /// Returns `true` if this adapter offers `operation`.
    #[must_use]
    pub const fn supports(&self, operation: Operation) -> bool {
        self.version().supports(operation)
    }

    /// Returns an error if this adapter does not offer `operation`.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::UnsupportedOperation`].
    pub fn ensure_supported(&self, operation: Operation) -> Result<(), KoreanBotsError> {
        if self.supports(operation) {
            Ok(())
        } else {
            tracing::debug!(%operation, version = %self.version(), "operation not offered");
            Err(KoreanBotsError::UnsupportedOperation {
                operation,
                version: self.version(),
            })
        }
    }

    pub(crate) async fn bot_info(&self, bot_id: &str) -> Result<Bot, KoreanBotsError> {
        match self {
            Self::V2(adapter) => adapter.bot_info(bot_id).await,
            Self::V1(_) => Err(self.unsupported(Operation::BotInfo)),
        }
    }

    pub(crate) async fn check_user_vote(&self, user_id: &str) -> Result<Voted, KoreanBotsError> {
        match self {
            Self::V1(adapter) => adapter.check_own_vote(user_id).await,
            Self::V2(adapter) => adapter.check_own_vote(user_id).await,
        }
    }

    pub(crate) async fn check_user_vote_for(
        &self,
        bot_id: &str,
        user_id: &str,
    ) -> Result<Voted, KoreanBotsError> {
        match self {
            Self::V2(adapter) => adapter.check_user_vote(bot_id, user_id).await,
            Self::V1(_) => Err(self.unsupported(Operation::CheckUserVoteFor)),
        }
    }

    pub(crate) async fn update_server_count(
        &self,
        servers: u32,
        shards: Option<u32>,
    ) -> Result<(), KoreanBotsError> {
        match self {
            Self::V1(adapter) => adapter.update_server_count(servers).await,
            Self::V2(adapter) => adapter.update_server_count(servers, shards).await,
        }
    }

    pub(crate) async fn user_info(&self, user_id: &str) -> Result<User, KoreanBotsError> {
        match self {
            Self::V2(adapter) => adapter.user_info(user_id).await,
            Self::V1(_) => Err(self.unsupported(Operation::UserInfo)),
        }
    }

    pub(crate) async fn search_bots(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResult, KoreanBotsError> {
        match self {
            Self::V2(adapter) => adapter.search_bots(query, page).await,
            Self::V1(_) => Err(self.unsupported(Operation::SearchBots)),
        }
    }

    pub(crate) async fn heart_ranking(&self, page: u32) -> Result<SearchResult, KoreanBotsError> {
        match self {
            Self::V2(adapter) => adapter.heart_ranking(page).await,
            Self::V1(_) => Err(self.unsupported(Operation::HeartRanking)),
        }
    }

    pub(crate) async fn new_bots(&self) -> Result<SearchResult, KoreanBotsError> {
        match self {
            Self::V2(adapter) => adapter.new_bots().await,
            Self::V1(_) => Err(self.unsupported(Operation::NewBots)),
        }
    }

    pub(crate) async fn bot_list(&self, page: u32) -> Result<Vec<models::v1::Bot>, KoreanBotsError> {
        match self {
            Self::V1(adapter) => adapter.bot_list(page).await,
            Self::V2(_) => Err(self.unsupported(Operation::BotList)),
        }
    }

    fn unsupported(&self, operation: Operation) -> KoreanBotsError {
        KoreanBotsError::UnsupportedOperation {
            operation,
            version: self.version(),
        }
    }
}

/// Sends a built request, folding build failures into the transport error.
async fn send(
    http_client: &HttpClient,
    request: Result<HttpRequest, InvalidHttpRequestError>,
) -> Result<HttpResponse, HttpError> {
    http_client.request(request?).await
}

/// Percent-encodes a single path segment.
fn encode_segment(segment: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(segment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BotId, BotToken};

    fn adapter(version: ApiVersion) -> Adapter {
        let config = KoreanBotsConfig::builder()
            .bot_id(BotId::new("1").unwrap())
            .token(BotToken::new("t").unwrap())
            .api_version(version)
            .build()
            .unwrap();
        let http_client = HttpClient::new(&config).unwrap();
        Adapter::new(&config, http_client)
    }

    #[test]
    fn test_adapter_follows_configured_version() {
        assert!(matches!(adapter(ApiVersion::V1), Adapter::V1(_)));
        assert!(matches!(adapter(ApiVersion::V2), Adapter::V2(_)));
    }

    #[test]
    fn test_ensure_supported() {
        let v1 = adapter(ApiVersion::V1);
        assert!(v1.ensure_supported(Operation::BotList).is_ok());
        assert!(matches!(
            v1.ensure_supported(Operation::UserInfo),
            Err(KoreanBotsError::UnsupportedOperation {
                operation: Operation::UserInfo,
                version: ApiVersion::V1,
            })
        ));

        let v2 = adapter(ApiVersion::V2);
        assert!(v2.ensure_supported(Operation::CheckUserVoteFor).is_ok());
        assert!(v2.ensure_supported(Operation::BotList).is_err());
    }

    #[test]
    fn test_unsupported_dispatch_fails_without_io() {
        let v1 = adapter(ApiVersion::V1);
        let error = tokio_test::assert_err!(tokio_test::block_on(v1.bot_info("1")));
        assert!(matches!(
            error,
            KoreanBotsError::UnsupportedOperation {
                operation: Operation::BotInfo,
                ..
            }
        ));

        let v2 = adapter(ApiVersion::V2);
        tokio_test::assert_err!(tokio_test::block_on(v2.bot_list(1)));
        tokio_test::assert_err!(tokio_test::block_on(v1.check_user_vote_for("1", "2")));
    }

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("123"), "123");
        assert_eq!(encode_segment("../x"), "..%2Fx");
    }
}
