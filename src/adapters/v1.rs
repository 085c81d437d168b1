//! The legacy v1 API.
//!
//! v1 offers the paginated bot list, a vote check for the configured bot
//! and a server count update. The token travels in a `token` header, and the
//! envelope `code` decides whether a call failed.

use crate::adapters::{encode_segment, send};
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, InvalidHttpRequestError};
use crate::config::{ApiVersion, BotToken, KoreanBotsConfig, Operation};
use crate::models::{v1, Voted};
use crate::response::{KoreanBotsError, ResponseHandler, StatusPolicy};

/// Header carrying the bot token.
pub const TOKEN_HEADER: &str = "token";

/// Adapter for `/v1`.
#[derive(Clone, Debug)]
pub struct V1Adapter {
    token: BotToken,
    http_client: HttpClient,
    handler: ResponseHandler,
}

impl V1Adapter {
    /// Creates an adapter sending requests through `http_client`.
    #[must_use]
    pub fn new(config: &KoreanBotsConfig, http_client: HttpClient) -> Self {
        Self {
            token: config.token().clone(),
            http_client,
            handler: ResponseHandler::new(
                ApiVersion::V1,
                StatusPolicy::EnvelopeCode,
                config.codec().clone(),
            ),
        }
    }

    /// Returns the response handler in use.
    #[must_use]
    pub const fn handler(&self) -> &ResponseHandler {
        &self.handler
    }

    pub(crate) async fn bot_list(&self, page: u32) -> Result<Vec<v1::Bot>, KoreanBotsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "bots/get")
            .query_param("page", page.to_string())
            .build();
        let outcome = send(&self.http_client, request).await;
        self.handler.handle(Operation::BotList, outcome)
    }

    pub(crate) async fn check_own_vote(&self, user_id: &str) -> Result<Voted, KoreanBotsError> {
        // v1 puts `voted` beside `code` rather than under `data`.
        let outcome = send(&self.http_client, self.vote_request(user_id)).await;
        self.handler.handle_root(Operation::CheckUserVote, outcome)
    }

    pub(crate) async fn update_server_count(&self, servers: u32) -> Result<(), KoreanBotsError> {
        let outcome = send(&self.http_client, self.servers_request(servers)).await;
        self.handler.handle_empty(Operation::UpdateServerCount, outcome)
    }

    fn vote_request(&self, user_id: &str) -> Result<HttpRequest, InvalidHttpRequestError> {
        HttpRequest::builder(
            HttpMethod::Get,
            format!("bots/voted/{}", encode_segment(user_id)),
        )
        .header(TOKEN_HEADER, self.token.as_ref())
        .build()
    }

    fn servers_request(&self, servers: u32) -> Result<HttpRequest, InvalidHttpRequestError> {
        HttpRequest::builder(HttpMethod::Post, "bots/servers")
            .body(serde_json::json!({ "servers": servers }))
            .body_type(DataType::Json)
            .header(TOKEN_HEADER, self.token.as_ref())
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BotId;
    use serde_json::json;

    fn adapter() -> V1Adapter {
        let config = KoreanBotsConfig::builder()
            .bot_id(BotId::new("387548561816027138").unwrap())
            .token(BotToken::new("v1-token").unwrap())
            .api_version(ApiVersion::V1)
            .build()
            .unwrap();
        let http_client = HttpClient::new(&config).unwrap();
        V1Adapter::new(&config, http_client)
    }

    #[test]
    fn test_handler_uses_envelope_code_policy() {
        let adapter = adapter();
        assert_eq!(adapter.handler().version(), ApiVersion::V1);
        assert_eq!(adapter.handler().policy(), StatusPolicy::EnvelopeCode);
    }

    #[test]
    fn test_vote_request_uses_token_header() {
        let request = adapter().vote_request("260303569591205888").unwrap();

        assert_eq!(request.path, "bots/voted/260303569591205888");
        assert!(request.has_header("token"));
        assert!(!request.has_header("authorization"));
    }

    #[test]
    fn test_servers_request_always_sends_servers() {
        let request = adapter().servers_request(0).unwrap();

        assert_eq!(request.http_method, HttpMethod::Post);
        assert_eq!(request.path, "bots/servers");
        assert_eq!(request.body, Some(json!({"servers": 0})));
        assert_eq!(request.body_type, Some(DataType::Json));
    }
}
