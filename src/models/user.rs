//! User records returned by the v2 API.

use serde::{Deserialize, Serialize};

use crate::models::enums::{Category, State, Status};
use crate::models::flags::{BotFlags, UserFlags};

/// A koreanbots user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
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
    /// Bots this user owns.
    #[serde(default)]
    pub bots: Vec<OwnedBot>,
}

/// A bot as listed on its owner's [`User`] record.
///
/// Same shape as [`Bot`](crate::models::Bot) except that `owners` lists ids.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedBot {
    pub id: String,
    pub name: String,
    pub tag: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Ids of the bot's owners.
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub flags: BotFlags,
    pub lib: String,
    pub prefix: String,
    pub votes: u64,
    pub servers: u64,
    #[serde(default)]
    pub shards: Option<u64>,
    pub intro: String,
    pub desc: String,
    #[serde(default)]
    pub web: Option<String>,
    #[serde(default)]
    pub git: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(default)]
    pub category: Vec<Category>,
    #[serde(default)]
    pub vanity: Option<String>,
    #[serde(default)]
    pub bg: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
    #[serde(default)]
    pub status: Option<Status>,
    pub state: State,
}
