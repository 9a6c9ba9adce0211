#[tokio::main]
async fn main() {
    // Startup errors are already logged by the server entry point.
    if failure_responder::run_with_config().await.is_err() {
        std::process::exit(1);
    }
}
