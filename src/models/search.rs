//! Paginated bot listings.

use serde::{Deserialize, Serialize};

use crate::models::bot::Bot;

/// A page of bots from search, heart ranking or the new-bots listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Listing kind, e.g. `SEARCH`, `VOTE` or `NEW`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Bots on this page.
    pub data: Vec<Bot>,
    /// Current page, starting at 1.
    pub current_page: u32,
    /// Total number of pages.
    pub total_page: u32,
}

impl SearchResult {
    /// Returns `true` if a later page exists.
    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.current_page < self.total_page
    }
}
