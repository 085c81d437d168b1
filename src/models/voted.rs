//! Vote check results.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Whether a user has voted for a bot.
///
/// # Example
///
/// ```rust
/// use koreanbots::models::Voted;
///
/// let voted: Voted = serde_json::from_str(r#"{"voted":true,"lastVote":1614749212000}"#).unwrap();
/// assert!(voted.voted);
/// assert_eq!(voted.last_vote_at().unwrap().timestamp(), 1_614_749_212);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Voted {
    /// `true` if the user voted within the current voting window.
    pub voted: bool,
    /// Time of the most recent vote in epoch milliseconds; 0 if the user
    /// never voted. Always 0 on v1.
    #[serde(default)]
    pub last_vote: i64,
}

impl Voted {
    /// Returns the time of the most recent vote, or `None` if the user never
    /// voted (or the API version does not report it).
    #[must_use]
    pub fn last_vote_at(&self) -> Option<DateTime<Utc>> {
        if self.last_vote <= 0 {
            return None;
        }
        Utc.timestamp_millis_opt(self.last_vote).single()
    }
}
