//! HTTP client for koreanbots API communication.
//!
//! This module provides the [`HttpClient`] type, a thin layer over `reqwest`
//! bound to one API host and version path.

use std::collections::HashMap;
use std::sync::Arc;

use crate::clients::errors::HttpError;
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::codec::{self, Codec};
use crate::config::{ApiVersion, KoreanBotsConfig};

/// Library name from Cargo.toml.
pub const SDK_NAME: &str = env!("CARGO_PKG_NAME");

/// Library version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Source repository from Cargo.toml.
pub const SDK_REPOSITORY: &str = env!("CARGO_PKG_REPOSITORY");

/// HTTP client for making requests to the koreanbots API.
///
/// The client handles:
/// - URL construction from the API host and the version path
/// - Default headers (`User-Agent`, `Accept`)
/// - Body encoding through the configured [`Codec`]
///
/// It does not retry and does not interpret status codes: any response that
/// arrives is returned as an [`HttpResponse`]. Only failures to obtain a
/// response are errors.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync` and cheap to clone.
#[derive(Clone, Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URI (e.g., `https://koreanbots.dev/api`).
    base_uri: String,
    /// Base path (e.g., "/v2").
    base_path: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Codec used to encode request bodies.
    codec: Arc<dyn Codec>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a client bound to the configured host and API version.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use koreanbots::clients::HttpClient;
    /// use koreanbots::{BotId, BotToken, KoreanBotsConfig};
    ///
    /// let config = KoreanBotsConfig::builder()
    ///     .bot_id(BotId::new("1234").unwrap())
    ///     .token(BotToken::new("token").unwrap())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = HttpClient::new(&config).unwrap();
    /// assert_eq!(client.base_uri(), "https://koreanbots.dev/api");
    /// assert_eq!(client.base_path(), "/v2");
    /// ```
    pub fn new(config: &KoreanBotsConfig) -> Result<Self, HttpError> {
        Self::for_version(config, config.api_version())
    }

    /// Creates a client for an explicit API version, ignoring the version in
    /// `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created.
    pub fn for_version(config: &KoreanBotsConfig, version: ApiVersion) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent =
            format!("{user_agent_prefix}{SDK_NAME}/{SDK_VERSION} ({SDK_REPOSITORY})");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let client = reqwest::Client::builder().use_rustls_tls().build()?;

        Ok(Self {
            client,
            base_uri: config.api_host().as_ref().to_string(),
            base_path: version.base_path().to_string(),
            default_headers,
            codec: Arc::clone(config.codec()),
        })
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns the full URL a request path resolves to.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!(
            "{}{}/{}",
            self.base_uri,
            self.base_path,
            path.trim_start_matches('/')
        )
    }

    /// Sends an HTTP request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - The body cannot be encoded (`Encode`)
    /// - No response is received (`Network`)
    ///
    /// A non-2xx response is NOT an error at this layer.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some(query) = &request.query {
            req_builder = req_builder.query(query);
        }

        if let Some(body) = &request.body {
            let bytes = codec::encode(self.codec.as_ref(), body).map_err(HttpError::Encode)?;
            req_builder = req_builder.body(bytes);
        }

        tracing::debug!(method = %request.http_method, %url, "sending koreanbots request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.bytes().await?.to_vec();

        tracing::debug!(status = code, %url, bytes = body.len(), "received koreanbots response");

        Ok(HttpResponse::new(code, res_headers, body))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
