//! ws-registry server entry point.
//!
//! Binds port 3000 and serves the WebSocket endpoint.

use ws_registry::app_state::AppState;
use ws_registry::config::ServerConfig;
use ws_registry::logger::init_tracing;
use ws_registry::server;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = ServerConfig::from_env()?;

    // Initialize tracing
    init_tracing(&config);

    // Bind failure is fatal
    let listener = server::bind(&config).await?;

    server::serve(listener, AppState::default()).await?;

    Ok(())
}
