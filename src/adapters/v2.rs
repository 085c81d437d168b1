//! The v2 API.
//!
//! Reads of public data go out without credentials. Vote checks and stat
//! updates carry the token in the `Authorization` header. A non-2xx HTTP
//! status always fails the call.

use crate::adapters::{encode_segment, send};
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, InvalidHttpRequestError};
use crate::config::{ApiVersion, BotId, BotToken, KoreanBotsConfig, Operation};
use crate::models::{Bot, SearchResult, User, Voted};
use crate::response::{KoreanBotsError, ResponseHandler, StatusPolicy};

/// Header carrying the bot token.
pub const TOKEN_HEADER: &str = "Authorization";

/// Adapter for `/v2`.
#[derive(Clone, Debug)]
pub struct V2Adapter {
    bot_id: BotId,
    token: BotToken,
    http_client: HttpClient,
    handler: ResponseHandler,
}

impl V2Adapter {
    /// Creates an adapter sending requests through `http_client`.
    #[must_use]
    pub fn new(config: &KoreanBotsConfig, http_client: HttpClient) -> Self {
        Self {
            bot_id: config.bot_id().clone(),
            token: config.token().clone(),
            http_client,
            handler: ResponseHandler::new(
                ApiVersion::V2,
                StatusPolicy::HttpStatus,
                config.codec().clone(),
            ),
        }
    }

    /// Returns the response handler in use.
    #[must_use]
    pub const fn handler(&self) -> &ResponseHandler {
        &self.handler
    }

    pub(crate) async fn bot_info(&self, bot_id: &str) -> Result<Bot, KoreanBotsError> {
        let outcome = send(&self.http_client, self.bot_info_request(bot_id)).await;
        self.handler.handle(Operation::BotInfo, outcome)
    }

    pub(crate) async fn check_user_vote(
        &self,
        bot_id: &str,
        user_id: &str,
    ) -> Result<Voted, KoreanBotsError> {
        let outcome = send(&self.http_client, self.vote_request(bot_id, user_id)).await;
        self.handler.handle(Operation::CheckUserVoteFor, outcome)
    }

    pub(crate) async fn check_own_vote(&self, user_id: &str) -> Result<Voted, KoreanBotsError> {
        let outcome = send(&self.http_client, self.vote_request(self.bot_id.as_ref(), user_id)).await;
        self.handler.handle(Operation::CheckUserVote, outcome)
    }

    pub(crate) async fn update_server_count(
        &self,
        servers: u32,
        shards: Option<u32>,
    ) -> Result<(), KoreanBotsError> {
        let outcome = send(&self.http_client, self.stats_request(servers, shards)).await;
        self.handler.handle_empty(Operation::UpdateServerCount, outcome)
    }

    pub(crate) async fn user_info(&self, user_id: &str) -> Result<User, KoreanBotsError> {
        let outcome = send(&self.http_client, self.user_request(user_id)).await;
        self.handler.handle(Operation::UserInfo, outcome)
    }

    pub(crate) async fn search_bots(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResult, KoreanBotsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "search/bots")
            .query_param("query", query)
            .query_param("page", page.to_string())
            .build();
        let outcome = send(&self.http_client, request).await;
        self.handler.handle(Operation::SearchBots, outcome)
    }

    pub(crate) async fn heart_ranking(&self, page: u32) -> Result<SearchResult, KoreanBotsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "list/bots/votes")
            .query_param("page", page.to_string())
            .build();
        let outcome = send(&self.http_client, request).await;
        self.handler.handle(Operation::HeartRanking, outcome)
    }

    pub(crate) async fn new_bots(&self) -> Result<SearchResult, KoreanBotsError> {
        let request = HttpRequest::builder(HttpMethod::Get, "list/bots/new").build();
        let outcome = send(&self.http_client, request).await;
        self.handler.handle(Operation::NewBots, outcome)
    }

    fn bot_info_request(&self, bot_id: &str) -> Result<HttpRequest, InvalidHttpRequestError> {
        HttpRequest::builder(HttpMethod::Get, format!("bots/{}", encode_segment(bot_id))).build()
    }

    fn vote_request(
        &self,
        bot_id: &str,
        user_id: &str,
    ) -> Result<HttpRequest, InvalidHttpRequestError> {
        HttpRequest::builder(HttpMethod::Get, format!("bots/{}/vote", encode_segment(bot_id)))
            .query_param("userID", user_id)
            .header(TOKEN_HEADER, self.token.as_ref())
            .build()
    }

    fn stats_request(
        &self,
        servers: u32,
        shards: Option<u32>,
    ) -> Result<HttpRequest, InvalidHttpRequestError> {
        let mut body = serde_json::Map::new();
        if servers > 0 {
            body.insert("servers".to_string(), servers.into());
        }
        if let Some(shards) = shards.filter(|shards| *shards > 0) {
            body.insert("shards".to_string(), shards.into());
        }

        HttpRequest::builder(
            HttpMethod::Post,
            format!("bots/{}/stats", encode_segment(self.bot_id.as_ref())),
        )
        .body(body)
        .body_type(DataType::Json)
        .header(TOKEN_HEADER, self.token.as_ref())
        .build()
    }

    fn user_request(&self, user_id: &str) -> Result<HttpRequest, InvalidHttpRequestError> {
        HttpRequest::builder(HttpMethod::Get, format!("users/{}", encode_segment(user_id))).build()
    }
}
