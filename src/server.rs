//! Router composition and the accept loop.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::app_state::AppState;
use crate::config::ServerConfig;
use crate::error::ServerError;
use crate::logger::announce_startup;
use crate::ws::handler::ws_handler;

/// Builds the router: a single WebSocket route at `/`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ws_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Binds the configured listen address.
///
/// # Errors
///
/// Returns [`ServerError::Bind`] if the socket cannot be bound.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    TcpListener::bind(config.listen_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: config.listen_addr,
            source,
        })
}

/// Serves connections accepted on `listener` until the process exits.
///
/// Each upgraded connection runs in its own task; the peer address is
/// made available to the handler through `ConnectInfo`.
///
/// # Errors
///
/// Returns [`ServerError::Serve`] if the accept loop fails.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        announce_startup(addr);
    }

    let app = build_router(state);
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(ServerError::Serve)
}
