//! Raw HTTP response type.

use std::collections::HashMap;

use crate::response::is_success;

/// A raw response from the API: status, headers and undecoded body.
///
/// Decoding and status classification are left to the
/// [`ResponseHandler`](crate::response::ResponseHandler).
///
/// # Example
///
/// ```rust
/// use koreanbots::clients::HttpResponse;
/// use std::collections::HashMap;
///
/// let response = HttpResponse::new(404, HashMap::new(), br#"{"message":"x"}"#.to_vec());
/// assert!(!response.is_ok());
/// assert_eq!(response.body_text(), r#"{"message":"x"}"#);
/// ```
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The undecoded response body.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: Vec<u8>) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        is_success(self.code)
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    #[must_use]
    pub fn body_text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}
