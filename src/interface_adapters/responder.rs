use axum::body::Body;
use axum::http::header::{CONTENT_ENCODING, CONTENT_LENGTH, CONTENT_TYPE, TRANSFER_ENCODING};
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use tracing::{error, warn};

use crate::domain::{ErrorPayload, Failure, Severity};
use crate::use_cases::{Translation, translate};

// Pre-encoded body used if the payload can somehow not be serialized.
const FALLBACK_BODY: &[u8] = br#"{"code":500,"message":"Internal Server Error"}"#;

/// Terminal translator from framework [`Failure`]s to JSON error responses.
///
/// Stateless: every call works only on its input, so a single value can be
/// shared freely across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorResponder;

impl ErrorResponder {
    /// Translate a failure into a response. Never fails.
    ///
    /// Unknown error codes become 500. The body is always
    /// `{"code": <status>, "message": "<reason phrase>"}`; the failure's own
    /// detail only reaches the logs. If the failure carries a partial
    /// response, its headers are kept while status, body and content-type
    /// are replaced.
    pub fn respond(&self, mut failure: Failure) -> Response {
        let translation = translate(failure.error_code());
        log_failure(&failure, &translation);

        let body = Body::from(encode_payload(&translation.payload));

        let mut response = match failure.take_response() {
            Some(partial) => {
                let (mut parts, _) = partial.into_parts();
                parts.status = translation.status;
                // Framing and encoding described the old body.
                for name in [CONTENT_LENGTH, TRANSFER_ENCODING, CONTENT_ENCODING] {
                    parts.headers.remove(name);
                }
                Response::from_parts(parts, body)
            }
            None => {
                let mut response = Response::new(body);
                *response.status_mut() = translation.status;
                response
            }
        };

        response
            .headers_mut()
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        response
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        ErrorResponder.respond(self)
    }
}

fn log_failure(failure: &Failure, translation: &Translation) {
    let status = translation.status.as_u16();
    let error_code = failure.error_code();
    let kind = failure.kind().as_str();

    match translation.severity {
        Some(Severity::Warning) => warn!(
            error = %failure,
            error_code,
            status,
            kind,
            "an unhandled framework failure was raised"
        ),
        Some(Severity::Error) => error!(
            error = %failure,
            error_code,
            status,
            kind,
            "an unhandled framework failure was raised"
        ),
        None => {}
    }
}

fn encode_payload(payload: &ErrorPayload) -> Vec<u8> {
    serde_json::to_vec(payload).unwrap_or_else(|_| FALLBACK_BODY.to_vec())
}
