use axum::response::Response;
use std::fmt;

// Family of failures raised by the HTTP framework itself rather than by
// application logic, usually before a proper response could be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    BadRequest,
    NotFound,
    MethodNotAllowed,
    NotAcceptable,
    // Request body could not be decoded.
    Reader,
    // Response body could not be encoded.
    Writer,
    // A handler panicked.
    Internal,
    Other,
}

impl FailureKind {
    // Error code used when the raiser does not supply one.
    pub fn default_code(self) -> i32 {
        match self {
            FailureKind::BadRequest | FailureKind::Reader => 400,
            FailureKind::NotFound => 404,
            FailureKind::MethodNotAllowed => 405,
            FailureKind::NotAcceptable => 406,
            FailureKind::Writer | FailureKind::Internal | FailureKind::Other => 500,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::BadRequest => "bad_request",
            FailureKind::NotFound => "not_found",
            FailureKind::MethodNotAllowed => "method_not_allowed",
            FailureKind::NotAcceptable => "not_acceptable",
            FailureKind::Reader => "reader",
            FailureKind::Writer => "writer",
            FailureKind::Internal => "internal",
            FailureKind::Other => "other",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An internally-raised framework failure.
///
/// Carries the raw integer error code (which may not be a valid HTTP status),
/// a detail message meant for logs only, and optionally the partial response
/// the framework had already started building when it failed.
#[derive(Debug)]
pub struct Failure {
    kind: FailureKind,
    error_code: i32,
    detail: String,
    response: Option<Response>,
}

impl Failure {
    pub fn new(kind: FailureKind, error_code: i32, detail: impl Into<String>) -> Self {
        Self {
            kind,
            error_code,
            detail: detail.into(),
            response: None,
        }
    }

    // Build a failure using the kind's default error code.
    pub fn of(kind: FailureKind, detail: impl Into<String>) -> Self {
        Self::new(kind, kind.default_code(), detail)
    }

    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::of(FailureKind::BadRequest, detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::of(FailureKind::NotFound, detail)
    }

    pub fn method_not_allowed(detail: impl Into<String>) -> Self {
        Self::of(FailureKind::MethodNotAllowed, detail)
    }

    pub fn not_acceptable(detail: impl Into<String>) -> Self {
        Self::of(FailureKind::NotAcceptable, detail)
    }

    // Body decoding failures report the decoder's own code (400, 415, 422...).
    pub fn reader(error_code: i32, detail: impl Into<String>) -> Self {
        Self::new(FailureKind::Reader, error_code, detail)
    }

    pub fn writer(detail: impl Into<String>) -> Self {
        Self::of(FailureKind::Writer, detail)
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::of(FailureKind::Internal, detail)
    }

    // Attach the partial response the framework had already built.
    pub fn with_response(mut self, response: Response) -> Self {
        self.response = Some(response);
        self
    }

    pub fn kind(&self) -> FailureKind {
        self.kind
    }

    pub fn error_code(&self) -> i32 {
        self.error_code
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn response(&self) -> Option<&Response> {
        self.response.as_ref()
    }

    pub fn take_response(&mut self) -> Option<Response> {
        self.response.take()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} failure (code {}): {}",
            self.kind, self.error_code, self.detail
        )
    }
}

impl std::error::Error for Failure {}
