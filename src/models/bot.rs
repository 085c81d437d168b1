//! Bot records returned by the v2 API.

use serde::{Deserialize, Serialize};

use crate::models::enums::{Category, State, Status};
use crate::models::flags::{BotFlags, UserFlags};

/// A bot listed on koreanbots.
///
/// Optional fields are `None` when the API sends `null` or omits them.
///
/// # Example
///
/// ```rust
/// use koreanbots::models::{Bot, State};
///
/// let bot: Bot = serde_json::from_str(r#"{
///     "id": "653534001742741552", "name": "Koreanbots", "tag": "0001",
///     "avatar": null, "owners": [], "flags": 0, "lib": "discord.js",
///     "prefix": "!", "votes": 10, "servers": 100, "intro": "hi",
///     "desc": "long", "category": ["관리"], "status": "online", "state": "ok"
/// }"#).unwrap();
///
/// assert_eq!(bot.votes, 10);
/// assert_eq!(bot.state, State::Ok);
/// assert!(bot.web.is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bot {
    /// Discord id of the bot.
    pub id: String,
    /// Bot name.
    pub name: String,
    /// Discord discriminator.
    pub tag: String,
    /// Avatar hash.
    #[serde(default)]
    pub avatar: Option<String>,
    /// Owners of the bot.
    #[serde(default)]
    pub owners: Vec<BotOwner>,
    /// Bot flags.
    #[serde(default)]
    pub flags: BotFlags,
    /// Library the bot is written with.
    pub lib: String,
    /// Command prefix.
    pub prefix: String,
    /// Number of hearts (votes).
    pub votes: u64,
    /// Number of servers the bot is in.
    pub servers: u64,
    /// Number of shards, if reported.
    #[serde(default)]
    pub shards: Option<u64>,
    /// Short introduction.
    pub intro: String,
    /// Long description (markdown).
    pub desc: String,
    /// Website.
    #[serde(default)]
    pub web: Option<String>,
    /// GitHub repository or user.
    #[serde(default)]
    pub git: Option<String>,
    /// Invite link.
    #[serde(default)]
    pub url: Option<String>,
    /// Support server invite code.
    #[serde(default)]
    pub discord: Option<String>,
    /// Categories.
    #[serde(default)]
    pub category: Vec<Category>,
    /// Vanity URL.
    #[serde(default)]
    pub vanity: Option<String>,
    /// Background image URL.
    #[serde(default)]
    pub bg: Option<String>,
    /// Banner image URL.
    #[serde(default)]
    pub banner: Option<String>,
    /// Discord presence.
    #[serde(default)]
    pub status: Option<Status>,
    /// Moderation state.
    pub state: State,
}

/// An owner of a [`Bot`].
///
/// Same shape as [`User`](crate::models::User) except that `bots` lists ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotOwner {
    /// Discord id.
    pub id: String,
    /// Discord username.
    pub username: String,
    /// Discord discriminator.
    pub tag: String,
    /// GitHub username.
    #[serde(default)]
    pub github: Option<String>,
    /// User flags.
    #[serde(default)]
    pub flags: UserFlags,
    /// Ids of the bots this user owns.
    #[serde(default)]
    pub bots: Vec<String>,
}
