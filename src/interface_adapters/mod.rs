// Interface adapters: HTTP translation of framework failures and the routes that raise them.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod protocol;
pub mod reply;
pub mod responder;
pub mod routes;

pub use responder::ErrorResponder;
