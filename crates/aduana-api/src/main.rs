//! Binary entrypoint for the Aduana API server.
use aduana_api::run;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    // Default listen address can be overridden with ADUANA_ADDR
    let addr = std::env::var("ADUANA_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());
    run(&addr).await;
}
