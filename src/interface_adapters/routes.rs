use crate::interface_adapters::handlers::{
    echo, health, method_not_allowed, not_found, raise_failure,
};
use crate::interface_adapters::middleware::catch_panic;
use axum::{
    Router, middleware,
    routing::{get, post},
};

// Toggles for optional routes.
#[derive(Debug, Clone, Copy)]
pub struct RouteSettings {
    pub expose_failure_route: bool,
}

impl Default for RouteSettings {
    fn default() -> Self {
        Self { expose_failure_route: true }
    }
}

// Build the HTTP router.
pub fn app(settings: RouteSettings) -> Router {
    let mut router = Router::new()
        .route("/health", get(health))
        .route("/echo", post(echo));

    if settings.expose_failure_route {
        router = router.route("/failures/{code}", get(raise_failure));
    }

    with_failure_handling(router)
}

// Register every framework failure source with `ErrorResponder`: unmatched
// paths, unmatched methods and handler panics here; body/path decoding,
// `Accept` negotiation and response encoding through the `JsonBody`,
// `PathParam`, `AcceptsJson` and `JsonReply` adapters the handlers use.
pub fn with_failure_handling(router: Router) -> Router {
    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(middleware::from_fn(catch_panic))
}
