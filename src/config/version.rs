//! koreanbots API version definitions.
//!
//! This module provides [`ApiVersion`] for selecting which generation of the
//! koreanbots API a client talks to, and [`Operation`] for asking whether a
//! version offers a given call.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// An operation exposed by the client.
///
/// Not every API version offers every operation; see
/// [`ApiVersion::supports`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Look up a single bot by id.
    BotInfo,
    /// Check whether a user voted for the configured bot.
    CheckUserVote,
    /// Check whether a user voted for an arbitrary bot.
    CheckUserVoteFor,
    /// Report server and shard counts.
    UpdateServerCount,
    /// Look up a user by id.
    UserInfo,
    /// Full-text bot search.
    SearchBots,
    /// Bots ordered by hearts (votes).
    HeartRanking,
    /// Recently listed bots.
    NewBots,
    /// The paginated v1 bot list.
    BotList,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::BotInfo,
        Self::CheckUserVote,
        Self::CheckUserVoteFor,
        Self::UpdateServerCount,
        Self::UserInfo,
        Self::SearchBots,
        Self::HeartRanking,
        Self::NewBots,
        Self::BotList,
    ];

    /// Returns the snake_case name used in logs and error messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::BotInfo => "bot_info",
            Self::CheckUserVote => "check_user_vote",
            Self::CheckUserVoteFor => "check_user_vote_for",
            Self::UpdateServerCount => "update_server_count",
            Self::UserInfo => "user_info",
            Self::SearchBots => "search_bots",
            Self::HeartRanking => "heart_ranking",
            Self::NewBots => "new_bots",
            Self::BotList => "bot_list",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// koreanbots API version.
///
/// # Example
///
/// ```rust
/// use koreanbots::{ApiVersion, Operation};
///
/// let version: ApiVersion = "v1".parse().unwrap();
/// assert_eq!(version, ApiVersion::V1);
/// assert_eq!(ApiVersion::latest(), ApiVersion::V2);
/// assert!(!ApiVersion::V1.supports(Operation::UserInfo));
/// assert_eq!(ApiVersion::V2.to_string(), "v2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ApiVersion {
    /// The legacy v1 API.
    V1,
    /// The current v2 API.
    V2,
}

impl ApiVersion {
    /// Returns the latest stable API version.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2
    }

    /// Returns the numeric version, as reported in response envelopes.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
        }
    }

    /// Returns the version path segment appended to the API host.
    #[must_use]
    pub const fn base_path(self) -> &'static str {
        match self {
            Self::V1 => "/v1",
            Self::V2 => "/v2",
        }
    }

    /// Returns `true` if this version offers `operation`.
    #[must_use]
    pub const fn supports(self, operation: Operation) -> bool {
        match self {
            Self::V1 => matches!(
                operation,
                Operation::BotList | Operation::CheckUserVote | Operation::UpdateServerCount
            ),
            Self::V2 => !matches!(operation, Operation::BotList),
        }
    }

    /// Creates a version from its numeric form.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiVersion`] for anything but 1 or 2.
    pub fn from_number(number: u8) -> Result<Self, ConfigError> {
        match number {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            other => Err(ConfigError::InvalidApiVersion {
                version: other.to_string(),
            }),
        }
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::latest()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V1 => f.write_str("v1"),
            Self::V2 => f.write_str("v2"),
        }
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();

        match s.as_str() {
            "1" | "v1" => Ok(Self::V1),
            "2" | "v2" => Ok(Self::V2),
            _ => Err(ConfigError::InvalidApiVersion { version: s }),
        }
    }
}
