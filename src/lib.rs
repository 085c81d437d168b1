//! # koreanbots
//!
//! A Rust client for the [koreanbots](https://koreanbots.dev) Discord bot
//! list API, covering both the legacy v1 and the current v2 API behind one
//! client.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated configuration via [`KoreanBotsConfig`] and [`KoreanBotsConfigBuilder`]
//! - A [`KoreanBots`] client with async, blocking and callback forms of every operation
//! - Typed records for bots, users, votes and listings in [`models`]
//! - One error type, [`KoreanBotsError`], that keeps transport failures,
//!   API-reported failures and malformed responses apart
//!
//! ## Quick Start
//!
//! ```rust
//! use koreanbots::{ApiVersion, BotId, BotToken, KoreanBotsConfig, Operation};
//!
//! let config = KoreanBotsConfig::builder()
//!     .bot_id(BotId::new("653534001742741552").unwrap())
//!     .token(BotToken::new("your-token").unwrap())
//!     .api_version(ApiVersion::V2)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.api_version().supports(Operation::UserInfo));
//! ```
//!
//! ## Making API Requests
//!
//! ```rust,ignore
//! use koreanbots::{Callbacks, KoreanBots};
//!
//! let client = KoreanBots::new(config)?;
//!
//! // async
//! let voted = client.check_user_vote("260303569591205888").await?;
//!
//! // blocking, outside any async runtime
//! client.update_server_count_blocking(1200, Some(2))?;
//!
//! // callback
//! client.bot_info_with(
//!     "653534001742741552",
//!     Callbacks::new(|bot| println!("{} has {} hearts", bot.name, bot.votes))
//!         .on_failure(|error| eprintln!("{error}")),
//! )?;
//! ```
//!
//! ## API Versions
//!
//! The version is chosen once, in the configuration. Operations the version
//! does not offer return [`KoreanBotsError::UnsupportedOperation`] without
//! sending a request; see [`KoreanBots`] for the table.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: All newtypes validate on construction
//! - **Thread-safe**: The client and its configuration are `Send + Sync`
//! - **No hidden retries**: Every call sends at most one request

pub mod adapters;
pub mod client;
pub mod clients;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod response;

// Re-export public types at crate root for convenience
pub use client::{Callbacks, KoreanBots};
pub use config::{
    ApiHost, ApiVersion, BotId, BotToken, KoreanBotsConfig, KoreanBotsConfigBuilder, Operation,
};
pub use error::ConfigError;
pub use response::{KoreanBotsError, RequestFailure};

// Re-export HTTP client types
pub use clients::{HttpClient, HttpError};
