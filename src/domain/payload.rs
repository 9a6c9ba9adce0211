use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::domain::status::reason_phrase;

// Uniform JSON error body returned for every translated failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub code: u16,
    pub message: String,
}

impl ErrorPayload {
    // The message is always the standard reason phrase, never the failure detail.
    pub fn for_status(status: StatusCode) -> Self {
        Self {
            code: status.as_u16(),
            message: reason_phrase(status).to_string(),
        }
    }
}
