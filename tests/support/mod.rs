// Shared in-process server for the integration tests.
use std::sync::OnceLock;

use failure_responder::ServerConfig;

static SERVER: OnceLock<Result<String, String>> = OnceLock::new();

// Base URL of the shared server, started on first use. The listener is bound
// before this returns, so connections queue until the server task accepts.
pub fn server_url() -> Result<&'static str, String> {
    SERVER
        .get_or_init(start_server)
        .as_deref()
        .map_err(Clone::clone)
}

fn start_server() -> Result<String, String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")
        .map_err(|e| format!("failed to bind test listener: {e}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|e| format!("failed to make test listener non-blocking: {e}"))?;
    let address = listener
        .local_addr()
        .map_err(|e| format!("failed to read test listener address: {e}"))?;
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| format!("failed to build test runtime: {e}"))?;

    // Each #[tokio::test] has its own runtime; the server lives on a thread
    // that outlives all of them.
    std::thread::spawn(move || {
        runtime.block_on(async move {
            let listener = match tokio::net::TcpListener::from_std(listener) {
                Ok(listener) => listener,
                Err(e) => {
                    eprintln!("failed to register test listener: {e}");
                    return;
                }
            };
            if let Err(e) = failure_responder::run(listener, &ServerConfig::default()).await {
                eprintln!("test server stopped: {e}");
            }
        });
    });

    Ok(format!("http://{address}"))
}
