//! Records specific to the v1 API.

use serde::{Deserialize, Serialize};

use crate::models::enums::{Category, State};

/// A bot as listed by the v1 bot list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    /// Discord id of the bot.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Server count last reported by the bot.
    pub servers: u64,
    /// Total hearts received.
    pub votes: u64,
    /// One-line introduction.
    pub intro: String,
    /// Discord avatar hash.
    pub avatar: String,
    /// Custom invite URL, if set.
    #[serde(default)]
    pub url: Option<String>,
    /// Listing categories.
    #[serde(default)]
    pub category: Vec<Category>,
    /// Discord discriminator.
    pub tag: String,
    /// Review state on the list.
    pub state: State,
    /// Verified by koreanbots.
    pub verified: bool,
    /// Boosted listing.
    pub boosted: bool,
    /// Custom URL slug, if set.
    #[serde(default)]
    pub vanity: Option<String>,
    /// Banner image URL, if set.
    #[serde(default)]
    pub banner: Option<String>,
    /// Background image URL; empty when unset.
    pub bg: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_v1_bot_deserializes() {
        let bot: Bot = serde_json::from_str(
            r#"{
                "id": "387548561816027138",
                "name": "old",
                "servers": 5,
                "votes": 1,
                "intro": "intro",
                "avatar": "hash",
                "url": null,
                "category": ["게임", "밈"],
                "tag": "1234",
                "state": "ok",
                "verified": true,
                "boosted": false,
                "vanity": null,
                "banner": null,
                "bg": ""
            }"#,
        )
        .unwrap();

        assert!(bot.verified);
        assert!(!bot.boosted);
        assert_eq!(bot.category, vec![Category::Game, Category::Meme]);
    }
}
