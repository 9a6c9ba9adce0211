use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::Failure;

// JSON success body. Encoding errors are raised as writer failures so the
// client still gets the uniform error payload instead of a plain-text 500.
#[derive(Debug)]
pub struct JsonReply<T>(pub T);

impl<T: Serialize> IntoResponse for JsonReply<T> {
    fn into_response(self) -> Response {
        match serde_json::to_vec(&self.0) {
            Ok(body) => (
                [(CONTENT_TYPE, HeaderValue::from_static("application/json"))],
                body,
            )
                .into_response(),
            Err(err) => Failure::writer(format!("failed to encode response body: {err}"))
                .into_response(),
        }
    }
}
