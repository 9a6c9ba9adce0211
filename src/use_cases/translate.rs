use axum::http::StatusCode;

use crate::domain::{ErrorPayload, Severity, resolve_status};

// Outcome of translating a failure's error code, before any response is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub status: StatusCode,
    pub payload: ErrorPayload,
    pub severity: Option<Severity>,
}

// Decide status, body and log level for a raw framework error code.
pub fn translate(error_code: i32) -> Translation {
    let status = resolve_status(error_code);

    Translation {
        status,
        payload: ErrorPayload::for_status(status),
        severity: Severity::classify(status),
    }
}
