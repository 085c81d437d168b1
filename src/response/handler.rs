//! Turns raw transport outcomes into typed results.
//!
//! Every operation funnels through [`ResponseHandler`], which classifies a
//! response in a fixed order:
//!
//! 1. No response at all: [`KoreanBotsError::Transport`].
//! 2. The body does not decode as an [`Envelope`]:
//!    - with a 2xx status: [`KoreanBotsError::InvalidDataReceived`];
//!    - otherwise the body is read as an [`ErrorEnvelope`], falling back to a
//!      synthesized "Request failed with HTTP status N" message.
//! 3. The envelope decoded: the version's [`StatusPolicy`] decides whether
//!    the call failed, and with which code.
//! 4. Success without `data`: [`KoreanBotsError::NoDataReceived`] for
//!    operations that need a payload, `Ok(())` for those that do not.
//!    Payloads carried at the top level of the body go through
//!    [`ResponseHandler::handle_root`] instead, which decodes the whole body.

use std::sync::Arc;

use serde::de::{DeserializeOwned, IgnoredAny};

use crate::clients::{HttpError, HttpResponse};
use crate::codec::{self, Codec};
use crate::config::{ApiVersion, Operation};
use crate::response::envelope::{is_success, Envelope, ErrorEnvelope};
use crate::response::errors::{KoreanBotsError, RequestFailure};

/// Which status code decides success when the HTTP status and the envelope
/// code disagree.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusPolicy {
    /// The envelope `code` is authoritative. A decodable envelope with a 2xx
    /// code succeeds even under a non-2xx HTTP status.
    EnvelopeCode,
    /// A non-2xx HTTP status always fails and is the reported code. Under a
    /// 2xx status the envelope `code` is still checked.
    HttpStatus,
}

/// The classification of a response that arrived.
#[derive(Debug)]
enum Outcome<T> {
    Data(T),
    Empty,
    Failed(RequestFailure),
    Invalid(serde_json::Error),
}

/// Normalizes responses for one API version.
///
/// # Example
///
/// ```rust
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// use koreanbots::clients::HttpResponse;
/// use koreanbots::codec::JsonCodec;
/// use koreanbots::response::{ResponseHandler, StatusPolicy};
/// use koreanbots::{ApiVersion, KoreanBotsError, Operation};
///
/// let handler = ResponseHandler::new(ApiVersion::V2, StatusPolicy::HttpStatus, Arc::new(JsonCodec));
/// let response = HttpResponse::new(
///     404,
///     HashMap::new(),
///     br#"{"code":404,"version":2,"message":"Not Found"}"#.to_vec(),
/// );
///
/// let result = handler.handle::<u32>(Operation::BotInfo, Ok(response));
/// match result {
///     Err(KoreanBotsError::RequestFailed(failure)) => {
///         assert_eq!(failure.code, 404);
///         assert_eq!(failure.message, "Not Found");
///     }
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
#[derive(Clone, Debug)]
pub struct ResponseHandler {
    version: ApiVersion,
    policy: StatusPolicy,
    codec: Arc<dyn Codec>,
}

impl ResponseHandler {
    /// Creates a handler for `version` using `policy`.
    #[must_use]
    pub fn new(version: ApiVersion, policy: StatusPolicy, codec: Arc<dyn Codec>) -> Self {
        Self {
            version,
            policy,
            codec,
        }
    }

    /// Returns the API version this handler reports failures under.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// Returns the status policy in effect.
    #[must_use]
    pub const fn policy(&self) -> StatusPolicy {
        self.policy
    }

    /// Handles the outcome of an operation that requires a payload.
    ///
    /// # Errors
    ///
    /// Returns the [`KoreanBotsError`] kind the response classifies as;
    /// a success without `data` is [`KoreanBotsError::NoDataReceived`].
    pub fn handle<T: DeserializeOwned>(
        &self,
        operation: Operation,
        outcome: Result<HttpResponse, HttpError>,
    ) -> Result<T, KoreanBotsError> {
        let response = self.response_or_transport(operation, outcome)?;
        match self.classify::<T>(&response) {
            Outcome::Data(data) => Ok(data),
            Outcome::Empty => {
                tracing::warn!(%operation, version = %self.version, "response carried no data");
                Err(KoreanBotsError::NoDataReceived { operation })
            }
            Outcome::Failed(failure) => Err(self.failed(operation, failure)),
            Outcome::Invalid(source) => Err(self.invalid(operation, source, response.code)),
        }
    }

    /// Handles the outcome of an operation whose payload sits at the top level
    /// of the body, next to `code` and `message`, rather than under `data`.
    ///
    /// Failure is decided exactly as in [`handle`](Self::handle); only a
    /// successful body is decoded as `T`.
    ///
    /// # Errors
    ///
    /// Returns the [`KoreanBotsError`] kind the response classifies as; a
    /// successful body that does not match `T` is
    /// [`KoreanBotsError::InvalidDataReceived`].
    pub fn handle_root<T: DeserializeOwned>(
        &self,
        operation: Operation,
        outcome: Result<HttpResponse, HttpError>,
    ) -> Result<T, KoreanBotsError> {
        let response = self.response_or_transport(operation, outcome)?;
        match self.classify_root::<T>(&response) {
            Outcome::Data(data) => Ok(data),
            Outcome::Empty => Err(KoreanBotsError::NoDataReceived { operation }),
            Outcome::Failed(failure) => Err(self.failed(operation, failure)),
            Outcome::Invalid(source) => Err(self.invalid(operation, source, response.code)),
        }
    }

    /// Handles the outcome of an operation that carries no payload.
    ///
    /// Any `data` present is decoded and discarded.
    ///
    /// # Errors
    ///
    /// Returns the [`KoreanBotsError`] kind the response classifies as.
    pub fn handle_empty(
        &self,
        operation: Operation,
        outcome: Result<HttpResponse, HttpError>,
    ) -> Result<(), KoreanBotsError> {
        let response = self.response_or_transport(operation, outcome)?;
        match self.classify::<IgnoredAny>(&response) {
            Outcome::Data(_) | Outcome::Empty => Ok(()),
            Outcome::Failed(failure) => Err(self.failed(operation, failure)),
            Outcome::Invalid(source) => Err(self.invalid(operation, source, response.code)),
        }
    }

    fn response_or_transport(
        &self,
        operation: Operation,
        outcome: Result<HttpResponse, HttpError>,
    ) -> Result<HttpResponse, KoreanBotsError> {
        outcome.map_err(|source| {
            tracing::warn!(%operation, version = %self.version, error = %source, "koreanbots request did not complete");
            KoreanBotsError::Transport {
                source,
                version: self.version,
            }
        })
    }

    fn classify<T: DeserializeOwned>(&self, response: &HttpResponse) -> Outcome<T> {
        match self.checked_envelope::<T, T>(response) {
            Ok(envelope) => envelope.data.map_or(Outcome::Empty, Outcome::Data),
            Err(outcome) => outcome,
        }
    }

    fn classify_root<T: DeserializeOwned>(&self, response: &HttpResponse) -> Outcome<T> {
        if let Err(outcome) = self.checked_envelope::<IgnoredAny, T>(response) {
            return outcome;
        }
        match codec::decode::<T>(self.codec.as_ref(), &response.body) {
            Ok(data) => Outcome::Data(data),
            Err(source) => Outcome::Invalid(source),
        }
    }

    /// Decodes the envelope and applies the status policy. `Err` carries the
    /// final outcome for bodies that do not decode or report a failure.
    fn checked_envelope<D: DeserializeOwned, T>(
        &self,
        response: &HttpResponse,
    ) -> Result<Envelope<D>, Outcome<T>> {
        let envelope = match codec::decode::<Envelope<D>>(self.codec.as_ref(), &response.body) {
            Ok(envelope) => envelope,
            Err(source) if response.is_ok() => return Err(Outcome::Invalid(source)),
            Err(_) => return Err(Outcome::Failed(self.failure_from_error_body(response))),
        };

        if let Some(code) = self.failed_code(response.code, envelope.code) {
            let version = envelope.version.unwrap_or_else(|| self.version.number());
            return Err(Outcome::Failed(RequestFailure {
                message: envelope
                    .message
                    .unwrap_or_else(|| RequestFailure::from_status(code, version).message),
                errors: envelope.errors,
                code,
                version,
            }));
        }

        Ok(envelope)
    }

    fn failed_code(&self, http_status: u16, envelope_code: u16) -> Option<u16> {
        match self.policy {
            StatusPolicy::HttpStatus if !is_success(http_status) => Some(http_status),
            StatusPolicy::EnvelopeCode | StatusPolicy::HttpStatus => {
                (!is_success(envelope_code)).then_some(envelope_code)
            }
        }
    }

    fn failure_from_error_body(&self, response: &HttpResponse) -> RequestFailure {
        let Ok(body) = codec::decode::<ErrorEnvelope>(self.codec.as_ref(), &response.body) else {
            return RequestFailure::from_status(response.code, self.version.number());
        };

        let code = match self.policy {
            StatusPolicy::HttpStatus => response.code,
            StatusPolicy::EnvelopeCode => body.code.unwrap_or(response.code),
        };

        RequestFailure {
            message: body.message,
            errors: body.errors,
            code,
            version: body.version.unwrap_or_else(|| self.version.number()),
        }
    }

    fn failed(&self, operation: Operation, failure: RequestFailure) -> KoreanBotsError {
        tracing::warn!(
            %operation,
            version = %self.version,
            code = failure.code,
            message = %failure.message,
            "koreanbots request failed"
        );
        KoreanBotsError::RequestFailed(failure)
    }

    fn invalid(&self, operation: Operation, source: serde_json::Error, code: u16) -> KoreanBotsError {
        tracing::warn!(%operation, version = %self.version, status = code, error = %source, "undecodable koreanbots response");
        KoreanBotsError::InvalidDataReceived { source, code }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InvalidHttpRequestError;
    use crate::codec::JsonCodec;
    use serde::Deserialize;
    use std::collections::HashMap;

    #[derive(Debug, PartialEq, Deserialize)]
    struct Payload {
        id: String,
        votes: u32,
    }

    fn handler(policy: StatusPolicy) -> ResponseHandler {
        ResponseHandler::new(ApiVersion::V2, policy, Arc::new(JsonCodec))
    }

    fn response(code: u16, body: &str) -> Result<HttpResponse, HttpError> {
        Ok(HttpResponse::new(code, HashMap::new(), body.as_bytes().to_vec()))
    }

    fn expect_failure<T: std::fmt::Debug>(result: Result<T, KoreanBotsError>) -> RequestFailure {
        match result {
            Err(KoreanBotsError::RequestFailed(failure)) => failure,
            other => panic!("expected RequestFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_success_returns_data() {
        let result: Payload = handler(StatusPolicy::HttpStatus)
            .handle(
                Operation::BotInfo,
                response(200, r#"{"code":200,"version":2,"data":{"id":"b1","votes":10}}"#),
            )
            .unwrap();

        assert_eq!(
            result,
            Payload {
                id: "b1".to_string(),
                votes: 10
            }
        );
    }

    #[test]
    fn test_transport_error_is_preserved() {
        let result = handler(StatusPolicy::HttpStatus).handle::<Payload>(
            Operation::BotInfo,
            Err(HttpError::InvalidRequest(InvalidHttpRequestError::MissingBodyType)),
        );

        match result {
            Err(KoreanBotsError::Transport { version, .. }) => assert_eq!(version, ApiVersion::V2),
            other => panic!("expected Transport, got {other:?}"),
        }
    }

    #[test]
    fn test_non_2xx_with_envelope_reports_message_and_code() {
        let failure = expect_failure(handler(StatusPolicy::HttpStatus).handle::<Payload>(
            Operation::BotInfo,
            response(404, r#"{"code":404,"version":2,"message":"Not Found"}"#),
        ));

        assert_eq!(failure.message, "Not Found");
        assert_eq!(failure.code, 404);
        assert_eq!(failure.version, 2);
    }

    #[test]
    fn test_non_2xx_with_unparseable_body_synthesizes_message() {
        let failure = expect_failure(
            handler(StatusPolicy::HttpStatus)
                .handle::<Payload>(Operation::BotInfo, response(502, "<html>Bad Gateway</html>")),
        );

        assert_eq!(failure.message, "Request failed with HTTP status 502");
        assert_eq!(failure.code, 502);
        assert_eq!(failure.errors, None);
    }

    #[test]
    fn test_non_2xx_with_error_body_keeps_errors() {
        let failure = expect_failure(handler(StatusPolicy::HttpStatus).handle_empty(
            Operation::UpdateServerCount,
            response(
                400,
                r#"{"message":"Bad Request","errors":["servers must be positive"]}"#,
            ),
        ));

        assert_eq!(failure.message, "Bad Request");
        assert_eq!(
            failure.errors,
            Some(vec!["servers must be positive".to_string()])
        );
        assert_eq!(failure.code, 400);
    }

    #[test]
    fn test_2xx_with_malformed_body_is_invalid_data() {
        let result = handler(StatusPolicy::HttpStatus).handle::<Payload>(
            Operation::BotInfo,
            response(200, r#"{"code":200,"data":{"id":7}}"#),
        );

        match result {
            Err(KoreanBotsError::InvalidDataReceived { code, .. }) => assert_eq!(code, 200),
            other => panic!("expected InvalidDataReceived, got {other:?}"),
        }
    }

    #[test]
    fn test_2xx_with_non_json_body_is_invalid_data() {
        let result =
            handler(StatusPolicy::EnvelopeCode).handle_empty(Operation::UpdateServerCount, response(200, "OK"));
        assert!(matches!(
            result,
            Err(KoreanBotsError::InvalidDataReceived { .. })
        ));
    }

    #[test]
    fn test_missing_data_on_required_payload_is_no_data() {
        let result = handler(StatusPolicy::HttpStatus).handle::<Payload>(
            Operation::BotInfo,
            response(200, r#"{"code":200,"version":2}"#),
        );

        match result {
            Err(KoreanBotsError::NoDataReceived { operation }) => {
                assert_eq!(operation, Operation::BotInfo);
            }
            other => panic!("expected NoDataReceived, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_data_on_empty_operation_succeeds() {
        handler(StatusPolicy::HttpStatus)
            .handle_empty(
                Operation::UpdateServerCount,
                response(200, r#"{"code":200,"version":2,"message":"Updated"}"#),
            )
            .unwrap();
    }

    #[test]
    fn test_data_on_empty_operation_is_discarded() {
        handler(StatusPolicy::HttpStatus)
            .handle_empty(
                Operation::UpdateServerCount,
                response(200, r#"{"code":200,"data":{"anything":[1,2,3]}}"#),
            )
            .unwrap();
    }

    #[test]
    fn test_envelope_failure_code_under_2xx_status() {
        for policy in [StatusPolicy::HttpStatus, StatusPolicy::EnvelopeCode] {
            let failure = expect_failure(handler(policy).handle::<Payload>(
                Operation::BotInfo,
                response(200, r#"{"code":403,"version":2,"message":"Forbidden"}"#),
            ));
            assert_eq!(failure.code, 403);
        }
    }

    #[test]
    fn test_envelope_code_policy_trusts_envelope_over_status() {
        let result: Payload = handler(StatusPolicy::EnvelopeCode)
            .handle(
                Operation::BotInfo,
                response(500, r#"{"code":200,"data":{"id":"b1","votes":1}}"#),
            )
            .unwrap();
        assert_eq!(result.votes, 1);
    }

    #[test]
    fn test_http_status_policy_trusts_status_over_envelope() {
        let failure = expect_failure(handler(StatusPolicy::HttpStatus).handle::<Payload>(
            Operation::BotInfo,
            response(500, r#"{"code":200,"data":{"id":"b1","votes":1}}"#),
        ));
        assert_eq!(failure.code, 500);
        assert_eq!(failure.message, "Request failed with HTTP status 500");
    }

    #[test]
    fn test_root_payload_is_read_next_to_code() {
        let handler = ResponseHandler::new(
            ApiVersion::V1,
            StatusPolicy::EnvelopeCode,
            Arc::new(JsonCodec),
        );
        let voted: crate::models::Voted = handler
            .handle_root(
                Operation::CheckUserVote,
                response(200, r#"{"code":200,"voted":true}"#),
            )
            .unwrap();

        assert!(voted.voted);
        assert_eq!(voted.last_vote, 0);
    }

    #[test]
    fn test_root_payload_failure_uses_envelope_code() {
        let handler = ResponseHandler::new(
            ApiVersion::V1,
            StatusPolicy::EnvelopeCode,
            Arc::new(JsonCodec),
        );
        let failure = expect_failure(handler.handle_root::<crate::models::Voted>(
            Operation::CheckUserVote,
            response(200, r#"{"code":401,"message":"Invalid token"}"#),
        ));

        assert_eq!(failure.code, 401);
        assert_eq!(failure.message, "Invalid token");
        assert_eq!(failure.version, 1);
    }

    #[test]
    fn test_root_payload_mismatch_is_invalid_data() {
        let result = handler(StatusPolicy::EnvelopeCode).handle_root::<Payload>(
            Operation::CheckUserVote,
            response(200, r#"{"code":200,"data":{"id":"b1","votes":1}}"#),
        );
        assert!(matches!(
            result,
            Err(KoreanBotsError::InvalidDataReceived { code: 200, .. })
        ));
    }

    #[test]
    fn test_envelope_code_policy_reads_code_from_error_body() {
        let handler = ResponseHandler::new(
            ApiVersion::V1,
            StatusPolicy::EnvelopeCode,
            Arc::new(JsonCodec),
        );
        let failure = expect_failure(handler.handle_empty(
            Operation::UpdateServerCount,
            response(400, r#"{"message":"Invalid token","code":401}"#),
        ));

        assert_eq!(failure.code, 401);
        assert_eq!(failure.version, 1);
    }
}
