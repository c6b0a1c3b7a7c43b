//! WebSocket connection lifecycle.
//!
//! Registers an upgraded socket, sends the acknowledgement, then reads
//! client messages until the peer goes away. Cleanup (deregistration,
//! logging and closing the socket) runs on every exit path.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket};
use chrono::{DateTime, Utc};
use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use tokio::sync::Mutex;

use super::messages::{Acknowledgement, decode_payload};
use super::observer::MessageObserver;
use crate::app_state::AppState;
use crate::domain::ClientId;
use crate::error::ServerError;
use crate::logger::{EventKind, log_event};

/// Write half of an upgraded socket.
pub type WsSink = SplitSink<WebSocket, Message>;

/// Registry value for one live connection.
///
/// Cloning shares the same write half.
#[derive(Debug, Clone)]
pub struct ClientHandle {
    sink: Arc<Mutex<WsSink>>,
    peer: SocketAddr,
    connected_at: DateTime<Utc>,
}

impl ClientHandle {
    /// Wraps the write half of a socket accepted from `peer`.
    #[must_use]
    pub fn new(sink: WsSink, peer: SocketAddr) -> Self {
        Self {
            sink: Arc::new(Mutex::new(sink)),
            peer,
            connected_at: Utc::now(),
        }
    }

    /// Remote address of the client.
    #[must_use]
    pub const fn peer(&self) -> SocketAddr {
        self.peer
    }

    /// Time the connection was registered.
    #[must_use]
    pub const fn connected_at(&self) -> DateTime<Utc> {
        self.connected_at
    }

    /// Sends `msg` as one JSON text frame.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Encode`] if `msg` cannot be serialized and
    /// [`ServerError::Transport`] if the frame cannot be written.
    pub async fn send_json<T: Serialize>(&self, msg: &T) -> Result<(), ServerError> {
        let json = serde_json::to_string(msg)?;
        self.sink.lock().await.send(Message::text(json)).await?;
        Ok(())
    }

    /// Sends a close frame and flushes the write half.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Transport`] if the socket is already gone.
    pub async fn close(&self) -> Result<(), ServerError> {
        self.sink.lock().await.close().await?;
        Ok(())
    }
}

/// Why a read loop ended.
#[derive(Debug)]
enum Disconnect {
    /// Close frame or end of stream.
    Clean,
    /// Transport failure.
    Failed(ServerError),
}

/// Runs the lifecycle of one upgraded connection.
pub async fn run_connection(socket: WebSocket, peer: SocketAddr, state: AppState) {
    let (sink, mut stream) = socket.split();
    let handle = ClientHandle::new(sink, peer);
    let peer = handle.peer().to_string();

    let client_id = state.registry.register_unique(handle.clone()).await;
    log_event(
        EventKind::Success,
        &format!("Connect client ID: {client_id}"),
        &peer,
    );

    let outcome = match handle
        .send_json(&Acknowledgement::new(client_id.clone()))
        .await
    {
        Ok(()) => read_loop(&mut stream, &client_id, state.observer.as_ref()).await,
        Err(err) => Disconnect::Failed(err),
    };

    state.registry.deregister(&client_id).await;
    match outcome {
        Disconnect::Clean => log_event(EventKind::Warning, "Connection closed", &peer),
        Disconnect::Failed(err) => log_event(
            EventKind::Error,
            &format!("Connection closed: {err}"),
            &peer,
        ),
    }

    // The peer usually closed first, so failing here is expected.
    if let Err(err) = handle.close().await {
        tracing::debug!(%client_id, %err, "socket already closed");
    }
    let connected_secs = (Utc::now() - handle.connected_at()).num_seconds();
    tracing::debug!(%client_id, connected_secs, "connection released");
}

/// Reads messages until the peer closes or the transport fails.
async fn read_loop(
    stream: &mut SplitStream<WebSocket>,
    client_id: &ClientId,
    observer: &dyn MessageObserver,
) -> Disconnect {
    while let Some(msg) = stream.next().await {
        match msg {
            Ok(Message::Text(text)) => observer.on_message(client_id, text.as_str()),
            Ok(Message::Binary(bytes)) => observer.on_message(client_id, &decode_payload(&bytes)),
            Ok(Message::Close(frame)) => {
                tracing::debug!(%client_id, ?frame, "close frame received");
                return Disconnect::Clean;
            }
            Ok(Message::Ping(_) | Message::Pong(_)) => {}
            Err(err) => return Disconnect::Failed(err.into()),
        }
    }
    Disconnect::Clean
}
