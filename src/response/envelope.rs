//! Wire wrappers around every API response.

use serde::{Deserialize, Serialize};

/// The wrapper every successful (and most failed) responses are sent in.
///
/// `data` is optional: a stat update legitimately answers without a payload,
/// and a failure carries `message` instead.
///
/// # Example
///
/// ```rust
/// use koreanbots::response::Envelope;
///
/// let envelope: Envelope<u32> =
///     serde_json::from_str(r#"{"code":200,"version":2,"data":7}"#).unwrap();
/// assert_eq!(envelope.data, Some(7));
/// assert!(envelope.is_success());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    /// Logical status code.
    pub code: u16,
    /// API version that produced the response. Some v1 bodies omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u8>,
    /// The payload.
    #[serde(default = "Option::default", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Short error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Field-level error messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl<T> Envelope<T> {
    /// Returns `true` if `code` is in the 2xx range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        is_success(self.code)
    }
}

/// The smaller body the API sends for errors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// Short error message.
    pub message: String,
    /// Field-level error messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    /// Status code, if the server repeated it in the body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    /// API version, if present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u8>,
}

/// Returns `true` if `code` is in the 2xx range.
#[must_use]
pub const fn is_success(code: u16) -> bool {
    code >= 200 && code <= 299
}
