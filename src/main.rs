//! ConfGen — AI Network Configuration Assistant CLI
//!
//! Generates network device configurations from natural-language requests,
//! using a selected policy as generation context.

use confgen::app;

#[tokio::main]
async fn main() {
    if let Err(e) = confgen::logging::init_logging() {
        eprintln!("[WARN] Failed to initialize structured logging: {}", e);
    }

    if let Err(e) = app::run(std::env::args()).await {
        tracing::error!("{:#}", e);
        std::process::exit(1);
    }
}
