use serde::{Deserialize, Serialize};

// Response payload for the liveness check.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

// Request payload for the echo endpoint.
#[derive(Debug, Deserialize)]
pub struct EchoRequest {
    pub message: String,
}

// Response payload for the echo endpoint.
#[derive(Debug, Serialize)]
pub struct EchoResponse {
    pub message: String,
}
