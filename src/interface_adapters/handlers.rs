use crate::domain::{Failure, FailureKind};
use crate::interface_adapters::extractors::{AcceptsJson, JsonBody, PathParam};
use crate::interface_adapters::protocol::{EchoRequest, EchoResponse, HealthResponse};
use crate::interface_adapters::reply::JsonReply;
use axum::http::{Method, Uri};

// Liveness check.
pub async fn health(_: AcceptsJson) -> JsonReply<HealthResponse> {
    JsonReply(HealthResponse { status: "ok" })
}

// Echo a message back; blank messages are rejected.
#[tracing::instrument(name = "echo", skip_all)]
pub async fn echo(
    _: AcceptsJson,
    JsonBody(request): JsonBody<EchoRequest>,
) -> Result<JsonReply<EchoResponse>, Failure> {
    if request.message.trim().is_empty() {
        return Err(Failure::bad_request("message is required"));
    }

    Ok(JsonReply(EchoResponse {
        message: request.message,
    }))
}

// Raise a failure with an arbitrary error code to inspect how it is translated.
#[tracing::instrument(name = "raise_failure", skip_all)]
pub async fn raise_failure(PathParam(code): PathParam<i32>) -> Failure {
    Failure::new(FailureKind::Other, code, format!("raised code {code} on request"))
}

// Router fallback for paths with no route.
pub async fn not_found(method: Method, uri: Uri) -> Failure {
    Failure::not_found(format!("no route for {method} {uri}"))
}

// Router fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed(method: Method, uri: Uri) -> Failure {
    Failure::method_not_allowed(format!("{method} is not supported on {uri}"))
}
