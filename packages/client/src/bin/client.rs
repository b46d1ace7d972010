//! Terminal client for House Party rooms.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin houseparty -- --base-url http://127.0.0.1:8000
//! ```

use clap::Parser;
use houseparty_client::ClientConfig;
use houseparty_shared::logger::setup_logger;

#[tokio::main]
async fn main() {
    let config = ClientConfig::parse();

    // Initialize tracing
    setup_logger(env!("CARGO_BIN_NAME"), &config.log_level);

    if let Err(e) = houseparty_client::run(config).await {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
