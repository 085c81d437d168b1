//! Response normalization.
//!
//! - [`Envelope`] / [`ErrorEnvelope`]: the wire wrappers
//! - [`ResponseHandler`] / [`StatusPolicy`]: the classification rules
//! - [`KoreanBotsError`] / [`RequestFailure`]: the public error taxonomy

mod envelope;
mod errors;
mod handler;

pub use envelope::{is_success, Envelope, ErrorEnvelope};
pub use errors::{KoreanBotsError, RequestFailure};
pub use handler::{ResponseHandler, StatusPolicy};
