//! Axum WebSocket upgrade handler.

use std::net::SocketAddr;

use axum::extract::ws::WebSocketUpgrade;
use axum::extract::ws::rejection::WebSocketUpgradeRejection;
use axum::extract::{ConnectInfo, State};
use axum::response::{IntoResponse, Response};

use super::connection::run_connection;
use crate::app_state::AppState;
use crate::logger::{EventKind, log_event};

/// `GET /` — Upgrade HTTP connection to WebSocket.
///
/// Any origin is accepted. Requests that are not valid upgrades are logged
/// and answered with the extractor's standard rejection.
pub async fn ws_handler(
    upgrade: Result<WebSocketUpgrade, WebSocketUpgradeRejection>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    State(state): State<AppState>,
) -> Response {
    let ws = match upgrade {
        Ok(ws) => ws,
        Err(rejection) => {
            log_event(
                EventKind::Error,
                &format!("Upgrade rejected: {rejection}"),
                &peer.to_string(),
            );
            return rejection.into_response();
        }
    };

    ws.on_failed_upgrade(move |err: axum::Error| {
        log_event(
            EventKind::Error,
            &format!("Upgrade failed: {err}"),
            &peer.to_string(),
        );
    })
    .on_upgrade(move |socket| run_connection(socket, peer, state))
}
