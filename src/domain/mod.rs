// Domain layer: the framework failure family and how it maps onto HTTP.

pub mod failure;
pub mod payload;
pub mod status;

pub use failure::{Failure, FailureKind};
pub use payload::ErrorPayload;
pub use status::{Severity, reason_phrase, resolve_status};
