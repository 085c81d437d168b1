//! Typed records returned by the koreanbots API.
//!
//! All records are plain data: `Clone`, `Send + Sync`, with `serde`
//! implementations matching the wire format.

mod bot;
mod enums;
mod flags;
mod search;
mod user;
pub mod v1;
mod voted;

pub use bot::{Bot, BotOwner};
pub use enums::{Category, State, Status};
pub use flags::{BotFlag, BotFlags, UserFlag, UserFlags};
pub use search::SearchResult;
pub use user::{OwnedBot, User};
pub use voted::Voted;
