//! HTTP transport for koreanbots API communication.
//!
//! - [`HttpClient`]: the async HTTP client bound to one API host and version
//! - [`HttpRequest`]: a request built by an adapter
//! - [`HttpResponse`]: a raw status/headers/body triple
//! - [`HttpError`]: failures to obtain a response at all
//!
//! The transport never interprets status codes and never retries; every
//! response that arrives is handed to the
//! [`ResponseHandler`](crate::response::ResponseHandler).

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_NAME, SDK_REPOSITORY, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::HttpResponse;
