//! Shared fixtures for integration tests.

#![allow(dead_code)]

use koreanbots::{ApiHost, ApiVersion, BotId, BotToken, KoreanBots, KoreanBotsConfig};
use serde_json::{json, Value};

pub const BOT_ID: &str = "653534001742741552";
pub const USER_ID: &str = "260303569591205888";
pub const TOKEN: &str = "test-token";

/// Builds a config pointing at `host`.
pub fn config(host: &str, version: ApiVersion) -> KoreanBotsConfig {
    KoreanBotsConfig::builder()
        .bot_id(BotId::new(BOT_ID).unwrap())
        .token(BotToken::new(TOKEN).unwrap())
        .api_version(version)
        .api_host(ApiHost::new(host).unwrap())
        .build()
        .unwrap()
}

/// Builds a client pointing at `host`.
pub fn client(host: &str, version: ApiVersion) -> KoreanBots {
    KoreanBots::new(config(host, version)).unwrap()
}

/// A complete v2 bot record.
pub fn bot_json(id: &str, votes: u64) -> Value {
    json!({
        "id": id,
        "name": "KoreanBots",
        "tag": "4212",
        "avatar": null,
        "owners": [{
            "id": USER_ID,
            "username": "wonderlandpark",
            "tag": "0001",
            "github": null,
            "flags": 1,
            "bots": [id]
        }],
        "flags": 4,
        "lib": "discord.js",
        "prefix": "!",
        "votes": votes,
        "servers": 1200,
        "intro": "intro",
        "desc": "desc",
        "web": null,
        "git": null,
        "url": null,
        "discord": null,
        "category": ["관리"],
        "vanity": null,
        "bg": null,
        "banner": null,
        "status": "online",
        "state": "ok"
    })
}

/// A complete v1 bot record.
pub fn v1_bot_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "legacy",
        "servers": 10,
        "votes": 2,
        "intro": "intro",
        "avatar": "hash",
        "url": null,
        "category": ["게임"],
        "tag": "0001",
        "state": "ok",
        "verified": false,
        "boosted": true,
        "vanity": null,
        "banner": null,
        "bg": ""
    })
}

/// Wraps `data` in a success envelope.
pub fn envelope(version: u8, data: Value) -> Value {
    json!({ "code": 200, "version": version, "data": data })
}
