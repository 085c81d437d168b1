//! The koreanbots client.
//!
//! [`KoreanBots`] exposes every operation in three forms backed by one
//! implementation:
//!
//! - `async`: `client.bot_info(id).await`
//! - blocking: `client.bot_info_blocking(id)`
//! - callback: `client.bot_info_with(id, Callbacks::new(|bot| ...))`
//!
//! # Example
//!
//! ```rust,no_run
//! use koreanbots::{BotId, BotToken, KoreanBots, KoreanBotsConfig};
//!
//! # async fn run() -> Result<(), koreanbots::KoreanBotsError> {
//! let config = KoreanBotsConfig::builder()
//!     .bot_id(BotId::new("653534001742741552")?)
//!     .token(BotToken::new("my-token")?)
//!     .build()?;
//!
//! let client = KoreanBots::new(config)?;
//! let bot = client.bot_info("653534001742741552").await?;
//! println!("{} has {} hearts", bot.name, bot.votes);
//!
//! client.update_server_count(1200, Some(2)).await?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use tokio::runtime::{Builder, Handle, Runtime};

use crate::adapters::Adapter;
use crate::clients::HttpClient;
use crate::config::{ApiVersion, KoreanBotsConfig, Operation};
use crate::error::ConfigError;
use crate::models::{self, Bot, SearchResult, User, Voted};
use crate::response::KoreanBotsError;

type SuccessFn<T> = Box<dyn FnOnce(T) + Send + 'static>;
type FailureFn = Box<dyn FnOnce(KoreanBotsError) + Send + 'static>;

/// Completion handlers for the callback form of an operation.
///
/// Exactly one handler runs, on a runtime worker, after the call that
/// scheduled it has returned. Without [`on_failure`](Self::on_failure),
/// failures are logged at `debug` and dropped.
///
/// # Example
///
/// ```rust
/// use koreanbots::{Callbacks, models::Bot};
///
/// let callbacks = Callbacks::new(|bot: Bot| println!("{}", bot.name))
///     .on_failure(|error| eprintln!("lookup failed: {error}"));
/// # drop(callbacks);
/// ```
pub struct Callbacks<T> {
    on_success: SuccessFn<T>,
    on_failure: FailureFn,
}

impl<T> Callbacks<T> {
    /// Creates callbacks that run `on_success` with the result.
    #[must_use]
    pub fn new(on_success: impl FnOnce(T) + Send + 'static) -> Self {
        Self {
            on_success: Box::new(on_success),
            on_failure: Box::new(|error| {
                tracing::debug!(%error, "koreanbots callback failure without handler");
            }),
        }
    }

    /// Sets the handler for failures.
    #[must_use]
    pub fn on_failure(mut self, on_failure: impl FnOnce(KoreanBotsError) + Send + 'static) -> Self {
        self.on_failure = Box::new(on_failure);
        self
    }

    fn complete(self, result: Result<T, KoreanBotsError>) {
        match result {
            Ok(value) => (self.on_success)(value),
            Err(error) => (self.on_failure)(error),
        }
    }
}

impl<T> fmt::Debug for Callbacks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks").finish_non_exhaustive()
    }
}

/// Runs the blocking and callback forms.
///
/// Uses the runtime the client was built in, or owns one when built outside
/// any runtime.
#[derive(Debug)]
struct Executor {
    handle: Handle,
    owned: Option<Runtime>,
}

impl Executor {
    fn new() -> Result<Self, ConfigError> {
        if let Ok(handle) = Handle::try_current() {
            tracing::debug!("koreanbots client using the ambient runtime");
            return Ok(Self {
                handle,
                owned: None,
            });
        }

        let runtime = Builder::new_multi_thread()
            .enable_all()
            .thread_name("koreanbots-worker")
            .build()
            .map_err(|e| ConfigError::RuntimeUnavailable {
                reason: e.to_string(),
            })?;
        tracing::debug!("koreanbots client started its own runtime");

        Ok(Self {
            handle: runtime.handle().clone(),
            owned: Some(runtime),
        })
    }

    fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.handle.block_on(future)
    }

    fn spawn<F>(&self, future: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        drop(self.handle.spawn(future));
    }
}

impl Drop for Executor {
    fn drop(&mut self) {
        if let Some(runtime) = self.owned.take() {
            runtime.shutdown_background();
        }
    }
}

#[derive(Debug)]
struct Inner {
    config: KoreanBotsConfig,
    adapter: Adapter,
    executor: Executor,
}

/// Client for the koreanbots API.
///
/// The API version is fixed when the client is built. Operations the version
/// does not offer fail with [`KoreanBotsError::UnsupportedOperation`] without
/// touching the network; [`supports`](Self::supports) answers the question
/// up front.
///
/// | Operation | v1 | v2 |
/// |-----------|----|----|
/// | [`bot_info`](Self::bot_info) | | ✓ |
/// | [`check_user_vote`](Self::check_user_vote) | ✓ | ✓ |
/// | [`check_user_vote_for`](Self::check_user_vote_for) | | ✓ |
/// | [`update_server_count`](Self::update_server_count) | ✓ | ✓ |
/// | [`user_info`](Self::user_info) | | ✓ |
/// | [`search_bots`](Self::search_bots) | | ✓ |
/// | [`heart_ranking`](Self::heart_ranking) | | ✓ |
/// | [`new_bots`](Self::new_bots) | | ✓ |
/// | [`bot_list`](Self::bot_list) | ✓ | |
///
/// # Thread Safety
///
/// `KoreanBots` is `Send + Sync` and cheap to clone; clones share the
/// connection pool and runtime.
///
/// # Runtimes
///
/// Built inside a tokio runtime, the client schedules callbacks on that
/// runtime. Built outside one, it starts a small multi-thread runtime that is
/// shut down in the background when the last clone drops.
#[derive(Clone, Debug)]
pub struct KoreanBots {
    inner: Arc<Inner>,
}

// Verify KoreanBots is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KoreanBots>();
};

impl KoreanBots {
    /// Creates a client with the default HTTP transport.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::Transport`] if the HTTP client cannot be
    /// created, or [`KoreanBotsError::Config`] if no runtime is available.
    pub fn new(config: KoreanBotsConfig) -> Result<Self, KoreanBotsError> {
        let http_client =
            HttpClient::new(&config).map_err(|source| KoreanBotsError::Transport {
                source,
                version: config.api_version(),
            })?;
        Self::with_http_client(config, http_client)
    }

    /// Creates a client sending requests through `http_client`.
    ///
    /// The client must target the configured API version (see
    /// [`HttpClient::for_version`]).
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::Config`] if no runtime is available.
    pub fn with_http_client(
        config: KoreanBotsConfig,
        http_client: HttpClient,
    ) -> Result<Self, KoreanBotsError> {
        let adapter = Adapter::new(&config, http_client);
        let executor = Executor::new()?;

        tracing::debug!(version = %config.api_version(), bot_id = %config.bot_id(), "koreanbots client ready");

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                adapter,
                executor,
            }),
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &KoreanBotsConfig {
        &self.inner.config
    }

    /// Returns the API version in use.
    #[must_use]
    pub fn api_version(&self) -> ApiVersion {
        self.inner.adapter.version()
    }

    /// Returns `true` if the API version in use offers `operation`.
    #[must_use]
    pub fn supports(&self, operation: Operation) -> bool {
        self.inner.adapter.supports(operation)
    }

    // Bot info

    /// Looks up a bot by id. v2 only.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError`]; a missing bot is
    /// [`KoreanBotsError::RequestFailed`] with code 404.
    pub async fn bot_info(&self, bot_id: &str) -> Result<Bot, KoreanBotsError> {
        self.inner.adapter.bot_info(bot_id).await
    }

    /// Blocking form of [`bot_info`](Self::bot_info).
    ///
    /// # Errors
    ///
    /// Same as [`bot_info`](Self::bot_info).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime. An unsupported operation
    /// returns its error before any runtime is touched.
    pub fn bot_info_blocking(&self, bot_id: &str) -> Result<Bot, KoreanBotsError> {
        self.block_on(Operation::BotInfo, self.bot_info(bot_id))
    }

    /// Callback form of [`bot_info`](Self::bot_info).
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::UnsupportedOperation`] immediately, without
    /// running either callback, if the API version lacks the operation.
    pub fn bot_info_with(
        &self,
        bot_id: impl Into<String>,
        callbacks: Callbacks<Bot>,
    ) -> Result<(), KoreanBotsError> {
        let bot_id = bot_id.into();
        self.spawn_with(Operation::BotInfo, callbacks, |client| async move {
            client.bot_info(&bot_id).await
        })
    }

    // Vote checks

    /// Checks whether `user_id` voted for the configured bot.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError`] if the check fails.
    pub async fn check_user_vote(&self, user_id: &str) -> Result<Voted, KoreanBotsError> {
        self.inner.adapter.check_user_vote(user_id).await
    }

    /// Blocking form of [`check_user_vote`](Self::check_user_vote).
    ///
    /// # Errors
    ///
    /// Same as [`check_user_vote`](Self::check_user_vote).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime. An unsupported operation
    /// returns its error before any runtime is touched.
    pub fn check_user_vote_blocking(&self, user_id: &str) -> Result<Voted, KoreanBotsError> {
        self.block_on(Operation::CheckUserVote, self.check_user_vote(user_id))
    }

    /// Callback form of [`check_user_vote`](Self::check_user_vote).
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::UnsupportedOperation`] immediately if the
    /// API version lacks the operation.
    pub fn check_user_vote_with(
        &self,
        user_id: impl Into<String>,
        callbacks: Callbacks<Voted>,
    ) -> Result<(), KoreanBotsError> {
        let user_id = user_id.into();
        self.spawn_with(Operation::CheckUserVote, callbacks, |client| async move {
            client.check_user_vote(&user_id).await
        })
    }

    /// Checks whether `user_id` voted for `bot_id`. v2 only.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError`] if the check fails.
    pub async fn check_user_vote_for(
        &self,
        bot_id: &str,
        user_id: &str,
    ) -> Result<Voted, KoreanBotsError> {
        self.inner.adapter.check_user_vote_for(bot_id, user_id).await
    }

    /// Blocking form of [`check_user_vote_for`](Self::check_user_vote_for).
    ///
    /// # Errors
    ///
    /// Same as [`check_user_vote_for`](Self::check_user_vote_for).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime. An unsupported operation
    /// returns its error before any runtime is touched.
    pub fn check_user_vote_for_blocking(
        &self,
        bot_id: &str,
        user_id: &str,
    ) -> Result<Voted, KoreanBotsError> {
        self.block_on(Operation::CheckUserVoteFor, self.check_user_vote_for(bot_id, user_id))
    }

    /// Callback form of [`check_user_vote_for`](Self::check_user_vote_for).
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::UnsupportedOperation`] immediately if the
    /// API version lacks the operation.
    pub fn check_user_vote_for_with(
        &self,
        bot_id: impl Into<String>,
        user_id: impl Into<String>,
        callbacks: Callbacks<Voted>,
    ) -> Result<(), KoreanBotsError> {
        let bot_id = bot_id.into();
        let user_id = user_id.into();
        self.spawn_with(Operation::CheckUserVoteFor, callbacks, |client| async move {
            client.check_user_vote_for(&bot_id, &user_id).await
        })
    }

    // Stats

    /// Reports the configured bot's server count, and on v2 its shard count.
    ///
    /// On v2, a zero or `None` value is left out of the update. v1 has no
    /// shard count and ignores `shards`.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError`] if the update is rejected.
    pub async fn update_server_count(
        &self,
        servers: u32,
        shards: Option<u32>,
    ) -> Result<(), KoreanBotsError> {
        self.inner.adapter.update_server_count(servers, shards).await
    }

    /// Blocking form of [`update_server_count`](Self::update_server_count).
    ///
    /// # Errors
    ///
    /// Same as [`update_server_count`](Self::update_server_count).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime. An unsupported operation
    /// returns its error before any runtime is touched.
    pub fn update_server_count_blocking(
        &self,
        servers: u32,
        shards: Option<u32>,
    ) -> Result<(), KoreanBotsError> {
        self.block_on(Operation::UpdateServerCount, self.update_server_count(servers, shards))
    }

    /// Callback form of [`update_server_count`](Self::update_server_count).
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::UnsupportedOperation`] immediately if the
    /// API version lacks the operation.
    pub fn update_server_count_with(
        &self,
        servers: u32,
        shards: Option<u32>,
        callbacks: Callbacks<()>,
    ) -> Result<(), KoreanBotsError> {
        self.spawn_with(Operation::UpdateServerCount, callbacks, move |client| async move {
            client.update_server_count(servers, shards).await
        })
    }

    // Users

    /// Looks up a user by id. v2 only.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError`] if the lookup fails.
    pub async fn user_info(&self, user_id: &str) -> Result<User, KoreanBotsError> {
        self.inner.adapter.user_info(user_id).await
    }

    /// Blocking form of [`user_info`](Self::user_info).
    ///
    /// # Errors
    ///
    /// Same as [`user_info`](Self::user_info).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime. An unsupported operation
    /// returns its error before any runtime is touched.
    pub fn user_info_blocking(&self, user_id: &str) -> Result<User, KoreanBotsError> {
        self.block_on(Operation::UserInfo, self.user_info(user_id))
    }

    /// Callback form of [`user_info`](Self::user_info).
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::UnsupportedOperation`] immediately if the
    /// API version lacks the operation.
    pub fn user_info_with(
        &self,
        user_id: impl Into<String>,
        callbacks: Callbacks<User>,
    ) -> Result<(), KoreanBotsError> {
        let user_id = user_id.into();
        self.spawn_with(Operation::UserInfo, callbacks, |client| async move {
            client.user_info(&user_id).await
        })
    }

    // Listings

    /// Searches bots. Pages start at 1. v2 only.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError`] if the search fails.
    pub async fn search_bots(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResult, KoreanBotsError> {
        self.inner.adapter.search_bots(query, page).await
    }

    /// Blocking form of [`search_bots`](Self::search_bots).
    ///
    /// # Errors
    ///
    /// Same as [`search_bots`](Self::search_bots).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime. An unsupported operation
    /// returns its error before any runtime is touched.
    pub fn search_bots_blocking(
        &self,
        query: &str,
        page: u32,
    ) -> Result<SearchResult, KoreanBotsError> {
        self.block_on(Operation::SearchBots, self.search_bots(query, page))
    }

    /// Callback form of [`search_bots`](Self::search_bots).
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::UnsupportedOperation`] immediately if the
    /// API version lacks the operation.
    pub fn search_bots_with(
        &self,
        query: impl Into<String>,
        page: u32,
        callbacks: Callbacks<SearchResult>,
    ) -> Result<(), KoreanBotsError> {
        let query = query.into();
        self.spawn_with(Operation::SearchBots, callbacks, move |client| async move {
            client.search_bots(&query, page).await
        })
    }

    /// Lists bots by hearts, most first. Pages start at 1. v2 only.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError`] if the listing fails.
    pub async fn heart_ranking(&self, page: u32) -> Result<SearchResult, KoreanBotsError> {
        self.inner.adapter.heart_ranking(page).await
    }

    /// Blocking form of [`heart_ranking`](Self::heart_ranking).
    ///
    /// # Errors
    ///
    /// Same as [`heart_ranking`](Self::heart_ranking).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime. An unsupported operation
    /// returns its error before any runtime is touched.
    pub fn heart_ranking_blocking(&self, page: u32) -> Result<SearchResult, KoreanBotsError> {
        self.block_on(Operation::HeartRanking, self.heart_ranking(page))
    }

    /// Callback form of [`heart_ranking`](Self::heart_ranking).
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::UnsupportedOperation`] immediately if the
    /// API version lacks the operation.
    pub fn heart_ranking_with(
        &self,
        page: u32,
        callbacks: Callbacks<SearchResult>,
    ) -> Result<(), KoreanBotsError> {
        self.spawn_with(Operation::HeartRanking, callbacks, move |client| async move {
            client.heart_ranking(page).await
        })
    }

    /// Lists recently added bots. v2 only.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError`] if the listing fails.
    pub async fn new_bots(&self) -> Result<SearchResult, KoreanBotsError> {
        self.inner.adapter.new_bots().await
    }

    /// Blocking form of [`new_bots`](Self::new_bots).
    ///
    /// # Errors
    ///
    /// Same as [`new_bots`](Self::new_bots).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime. An unsupported operation
    /// returns its error before any runtime is touched.
    pub fn new_bots_blocking(&self) -> Result<SearchResult, KoreanBotsError> {
        self.block_on(Operation::NewBots, self.new_bots())
    }

    /// Callback form of [`new_bots`](Self::new_bots).
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::UnsupportedOperation`] immediately if the
    /// API version lacks the operation.
    pub fn new_bots_with(&self, callbacks: Callbacks<SearchResult>) -> Result<(), KoreanBotsError> {
        self.spawn_with(Operation::NewBots, callbacks, |client| async move {
            client.new_bots().await
        })
    }

    /// Lists bots on the v1 bot list. Pages start at 1. v1 only.
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError`] if the listing fails.
    pub async fn bot_list(&self, page: u32) -> Result<Vec<models::v1::Bot>, KoreanBotsError> {
        self.inner.adapter.bot_list(page).await
    }

    /// Blocking form of [`bot_list`](Self::bot_list).
    ///
    /// # Errors
    ///
    /// Same as [`bot_list`](Self::bot_list).
    ///
    /// # Panics
    ///
    /// Panics if called from within an async runtime. An unsupported operation
    /// returns its error before any runtime is touched.
    pub fn bot_list_blocking(&self, page: u32) -> Result<Vec<models::v1::Bot>, KoreanBotsError> {
        self.block_on(Operation::BotList, self.bot_list(page))
    }

    /// Callback form of [`bot_list`](Self::bot_list).
    ///
    /// # Errors
    ///
    /// Returns [`KoreanBotsError::UnsupportedOperation`] immediately if the
    /// API version lacks the operation.
    pub fn bot_list_with(
        &self,
        page: u32,
        callbacks: Callbacks<Vec<models::v1::Bot>>,
    ) -> Result<(), KoreanBotsError> {
        self.spawn_with(Operation::BotList, callbacks, move |client| async move {
            client.bot_list(page).await
        })
    }

    fn block_on<T, F>(&self, operation: Operation, future: F) -> Result<T, KoreanBotsError>
    where
        F: Future<Output = Result<T, KoreanBotsError>>,
    {
        self.inner.adapter.ensure_supported(operation)?;
        self.inner.executor.block_on(future)
    }

    fn spawn_with<T, F, Fut>(
        &self,
        operation: Operation,
        callbacks: Callbacks<T>,
        call: F,
    ) -> Result<(), KoreanBotsError>
    where
        T: Send + 'static,
        F: FnOnce(Self) -> Fut,
        Fut: Future<Output = Result<T, KoreanBotsError>> + Send + 'static,
    {
        self.inner.adapter.ensure_supported(operation)?;

        let future = call(self.clone());
        self.inner.executor.spawn(async move {
            callbacks.complete(future.await);
        });
        Ok(())
    }
}
