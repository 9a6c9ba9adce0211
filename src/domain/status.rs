use axum::http::StatusCode;

// Map a raw error code onto a registered HTTP status. Codes outside
// [100, 599] or without a standard reason phrase become 500.
pub fn resolve_status(code: i32) -> StatusCode {
    u16::try_from(code)
        .ok()
        .filter(|code| (100..600).contains(code))
        .and_then(|code| StatusCode::from_u16(code).ok())
        .filter(|status| status.canonical_reason().is_some())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn reason_phrase(status: StatusCode) -> &'static str {
    status
        .canonical_reason()
        .unwrap_or("Internal Server Error")
}

// Log level a translated failure deserves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    // 4xx is the client's fault, 5xx is ours; anything below 400 is not logged.
    pub fn classify(status: StatusCode) -> Option<Self> {
        if status.is_client_error() {
            Some(Severity::Warning)
        } else if status.is_server_error() {
            Some(Severity::Error)
        } else {
            None
        }
    }
}
