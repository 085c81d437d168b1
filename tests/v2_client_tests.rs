//! Integration tests for the v2 API against a mock server.

mod common;

use common::{bot_json, client, envelope, BOT_ID, TOKEN, USER_ID};
use koreanbots::models::{BotFlag, Category, Status};
use std::sync::Arc;

use koreanbots::codec::{Codec, JsonCodec};
use koreanbots::{
    ApiHost, ApiVersion, BotId, BotToken, KoreanBots, KoreanBotsConfig, KoreanBotsError,
    Operation,
};
use serde_json::json;
use wiremock::matchers::{
    body_json, body_string_contains, header, header_exists, method, path, query_param,
};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Fails the test if any request reaching the server carries a token.
async fn forbid_authorization(server: &MockServer) {
    Mock::given(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_bot_info_unwraps_envelope() {
    let server = MockServer::start().await;
    forbid_authorization(&server).await;
    Mock::given(method("GET"))
        .and(path("/v2/bots/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(2, bot_json("b1", 10))))
        .expect(1)
        .mount(&server)
        .await;

    let bot = client(&server.uri(), ApiVersion::V2)
        .bot_info("b1")
        .await
        .unwrap();

    assert_eq!(bot.id, "b1");
    assert_eq!(bot.votes, 10);
    assert_eq!(bot.category, vec![Category::Moderation]);
    assert_eq!(bot.status, Some(Status::Online));
    assert!(bot.flags.contains(BotFlag::KoreanbotsVerified));
}

#[tokio::test]
async fn test_bot_info_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/bots/missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 404,
            "version": 2,
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    let error = client(&server.uri(), ApiVersion::V2)
        .bot_info("missing")
        .await
        .unwrap_err();

    match error {
        KoreanBotsError::RequestFailed(failure) => {
            assert_eq!(failure.message, "Not Found");
            assert_eq!(failure.code, 404);
            assert_eq!(failure.version, 2);
        }
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bot_info_without_data_is_no_data_received() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/bots/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200, "version": 2})))
        .mount(&server)
        .await;

    let error = client(&server.uri(), ApiVersion::V2)
        .bot_info("b1")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        KoreanBotsError::NoDataReceived {
            operation: Operation::BotInfo
        }
    ));
}

#[tokio::test]
async fn test_bot_info_with_malformed_data_is_invalid() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/bots/b1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(envelope(2, json!({"id": "b1", "state": "ok"}))),
        )
        .mount(&server)
        .await;

    let error = client(&server.uri(), ApiVersion::V2)
        .bot_info("b1")
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        KoreanBotsError::InvalidDataReceived { code: 200, .. }
    ));
}

#[tokio::test]
async fn test_server_error_with_html_body_synthesizes_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/users/u1"))
        .respond_with(ResponseTemplate::new(503).set_body_string("<h1>maintenance</h1>"))
        .mount(&server)
        .await;

    let error = client(&server.uri(), ApiVersion::V2)
        .user_info("u1")
        .await
        .unwrap_err();

    assert!(error.is_retryable());
    let failure = error.request_failure().unwrap();
    assert_eq!(failure.code, 503);
    assert_eq!(failure.message, "Request failed with HTTP status 503");
}

#[tokio::test]
async fn test_update_server_count_sends_servers_only() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v2/bots/{BOT_ID}/stats")))
        .and(header("Authorization", TOKEN))
        .and(header("Content-Type", "application/json"))
        .and(body_json(json!({"servers": 42})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"code": 200, "version": 2, "message": "Updated"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    client(&server.uri(), ApiVersion::V2)
        .update_server_count(42, None)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_server_count_with_shards() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v2/bots/{BOT_ID}/stats")))
        .and(body_json(json!({"servers": 1200, "shards": 2})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200, "version": 2})))
        .expect(1)
        .mount(&server)
        .await;

    client(&server.uri(), ApiVersion::V2)
        .update_server_count(1200, Some(2))
        .await
        .unwrap();
}

#[tokio::test]
async fn test_update_server_count_rejected_with_field_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v2/bots/{BOT_ID}/stats")))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Bad Request",
            "errors": ["servers must be a positive integer"]
        })))
        .mount(&server)
        .await;

    let error = client(&server.uri(), ApiVersion::V2)
        .update_server_count(0, None)
        .await
        .unwrap_err();

    let failure = error.request_failure().unwrap();
    assert_eq!(failure.code, 400);
    assert_eq!(
        failure.errors,
        Some(vec!["servers must be a positive integer".to_string()])
    );
}

#[tokio::test]
async fn test_check_user_vote_is_scoped_to_configured_bot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/v2/bots/{BOT_ID}/vote")))
        .and(query_param("userID", USER_ID))
        .and(header("Authorization", TOKEN))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            2,
            json!({"voted": true, "lastVote": 1_614_749_212_000_i64}),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let voted = client(&server.uri(), ApiVersion::V2)
        .check_user_vote(USER_ID)
        .await
        .unwrap();

    assert!(voted.voted);
    assert_eq!(voted.last_vote_at().unwrap().timestamp(), 1_614_749_212);
}

#[tokio::test]
async fn test_check_user_vote_for_other_bot() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/bots/other/vote"))
        .and(query_param("userID", USER_ID))
        .and(header_exists("Authorization"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(envelope(2, json!({"voted": false, "lastVote": 0}))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let voted = client(&server.uri(), ApiVersion::V2)
        .check_user_vote_for("other", USER_ID)
        .await
        .unwrap();

    assert!(!voted.voted);
    assert!(voted.last_vote_at().is_none());
}

#[tokio::test]
async fn test_user_info_is_unauthenticated() {
    let server = MockServer::start().await;
    forbid_authorization(&server).await;
    Mock::given(method("GET"))
        .and(path(format!("/v2/users/{USER_ID}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            2,
            json!({
                "id": USER_ID,
                "username": "wonderlandpark",
                "tag": "0001",
                "github": "wonderlandpark",
                "flags": 0,
                "bots": []
            }),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let user = client(&server.uri(), ApiVersion::V2)
        .user_info(USER_ID)
        .await
        .unwrap();

    assert_eq!(user.username, "wonderlandpark");
    assert_eq!(user.github.as_deref(), Some("wonderlandpark"));
}

#[tokio::test]
async fn test_listings_send_query_and_page() {
    let server = MockServer::start().await;
    forbid_authorization(&server).await;
    Mock::given(method("GET"))
        .and(path("/v2/search/bots"))
        .and(query_param("query", "뮤직 봇"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            2,
            json!({"type": "SEARCH", "data": [bot_json("b1", 1)], "currentPage": 2, "totalPage": 2}),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/list/bots/votes"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            2,
            json!({"type": "VOTE", "data": [], "currentPage": 1, "totalPage": 5}),
        )))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v2/list/bots/new"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            2,
            json!({"type": "NEW", "data": [bot_json("b2", 0)], "currentPage": 1, "totalPage": 1}),
        )))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server.uri(), ApiVersion::V2);

    let search = client.search_bots("뮤직 봇", 2).await.unwrap();
    assert_eq!(search.kind, "SEARCH");
    assert_eq!(search.data[0].id, "b1");
    assert!(!search.has_next_page());

    let ranking = client.heart_ranking(1).await.unwrap();
    assert_eq!(ranking.total_page, 5);
    assert!(ranking.has_next_page());

    let new_bots = client.new_bots().await.unwrap();
    assert_eq!(new_bots.data[0].id, "b2");
}

#[tokio::test]
async fn test_logical_error_inside_200_is_caught() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/bots/b1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": 429,
            "version": 2,
            "message": "Too Many Requests"
        })))
        .mount(&server)
        .await;

    let error = client(&server.uri(), ApiVersion::V2)
        .bot_info("b1")
        .await
        .unwrap_err();

    assert_eq!(error.status_code(), Some(429));
}

#[tokio::test]
async fn test_v1_only_operation_sends_nothing() {
    let server = MockServer::start().await;

    let error = client(&server.uri(), ApiVersion::V2)
        .bot_list(1)
        .await
        .unwrap_err();

    assert!(matches!(
        error,
        KoreanBotsError::UnsupportedOperation {
            operation: Operation::BotList,
            version: ApiVersion::V2,
        }
    ));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_agent_identifies_library() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v2/list/bots/new"))
        .and(header(
            "User-Agent",
            format!(
                "koreanbots/{} ({})",
                koreanbots::clients::SDK_VERSION,
                koreanbots::clients::SDK_REPOSITORY
            )
            .as_str(),
        ))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(
            2,
            json!({"type": "NEW", "data": [], "currentPage": 1, "totalPage": 1}),
        )))
        .expect(1)
        .mount(&server)
        .await;

    client(&server.uri(), ApiVersion::V2).new_bots().await.unwrap();
}

/// Writes indented JSON so tests can tell its output from the default codec's.
#[derive(Debug)]
struct PrettyCodec;

impl Codec for PrettyCodec {
    fn decode_value(&self, bytes: &[u8]) -> Result<serde_json::Value, serde_json::Error> {
        JsonCodec.decode_value(bytes)
    }

    fn encode_value(&self, value: &serde_json::Value) -> Result<Vec<u8>, serde_json::Error> {
        serde_json::to_vec_pretty(value)
    }
}

#[tokio::test]
async fn test_request_body_is_written_by_configured_codec() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(format!("/v2/bots/{BOT_ID}/stats")))
        .and(body_json(json!({"servers": 42})))
        .and(body_string_contains("\n  \"servers\": 42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"code": 200})))
        .expect(1)
        .mount(&server)
        .await;

    let config = KoreanBotsConfig::builder()
        .bot_id(BotId::new(BOT_ID).unwrap())
        .token(BotToken::new(TOKEN).unwrap())
        .api_host(ApiHost::new(&server.uri()).unwrap())
        .codec(Arc::new(PrettyCodec))
        .build()
        .unwrap();

    KoreanBots::new(config)
        .unwrap()
        .update_server_count(42, None)
        .await
        .unwrap();
}
