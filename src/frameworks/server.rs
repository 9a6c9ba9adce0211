// Framework bootstrap for the failure responder service.

use crate::frameworks::config::{self, LogFormat, ServerConfig};
use crate::interface_adapters::routes::{self, RouteSettings};
use std::io::Result;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

// Installs the global subscriber. Fails when one is already set.
fn init_tracing(format: LogFormat) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Exactly one of the two output layers is present.
    let json = (format == LogFormat::Json).then(|| {
        fmt::layer()
            .with_target(false)
            .json()
            .with_current_span(true)
    });
    let compact = (format == LogFormat::Compact)
        .then(|| fmt::layer().with_target(false).compact());

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(compact)
        .try_init()
        .map_err(std::io::Error::other)?;

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));

    Ok(())
}

pub async fn run(listener: tokio::net::TcpListener, config: &ServerConfig) -> Result<()> {
    let address = listener.local_addr()?;

    // Wire routes with the failure translator registered on every fallback.
    let app = routes::app(RouteSettings {
        expose_failure_route: config.expose_failure_route,
    });

    tracing::info!(%address, expose_failure_route = config.expose_failure_route, "listening");

    // Serve app and report errors rather than panicking.
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config() -> Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    // Config comes first since it picks the log format; report its errors on
    // stderr because no subscriber exists yet.
    let config = config::load().map_err(|e| {
        eprintln!("invalid configuration: {e}");
        std::io::Error::other(e)
    })?;
    init_tracing(config.log_format)?;

    let address = config.bind_addr;

    // Bind TCP listener with error handling.
    let listener = tokio::net::TcpListener::bind(address)
        .await
        .inspect_err(|e| {
            tracing::error!(%address, error = %e, "failed to bind");
        })?;

    run(listener, &config).await
}
