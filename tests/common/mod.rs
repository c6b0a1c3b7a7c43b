//! Shared helpers for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use ws_registry::app_state::AppState;
use ws_registry::domain::{ClientId, ConnectionRegistry};
use ws_registry::server;
use ws_registry::ws::connection::ClientHandle;
use ws_registry::ws::observer::MessageObserver;

/// Observer that forwards every message to a channel.
#[derive(Debug)]
pub struct RecordingObserver {
    tx: mpsc::UnboundedSender<(ClientId, String)>,
}

impl MessageObserver for RecordingObserver {
    fn on_message(&self, client_id: &ClientId, text: &str) {
        let _ = self.tx.send((client_id.clone(), text.to_owned()));
    }
}

/// A server running on an ephemeral port.
#[derive(Debug)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub registry: Arc<ConnectionRegistry<ClientHandle>>,
    pub messages: mpsc::UnboundedReceiver<(ClientId, String)>,
}

impl TestServer {
    pub fn ws_url(&self) -> String {
        format!("ws://{}/", self.addr)
    }

    pub fn http_url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Waits until `id` is no longer registered. Returns `false` on timeout.
    pub async fn wait_until_gone(&self, id: &str) -> bool {
        tokio::time::timeout(Duration::from_secs(2), async {
            while self.registry.contains(id).await {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .is_ok()
    }

    /// Receives the next observed message, or `None` on timeout.
    pub async fn next_message(&mut self) -> Option<(ClientId, String)> {
        tokio::time::timeout(Duration::from_secs(2), self.messages.recv())
            .await
            .ok()
            .flatten()
    }
}

/// Serves `state` on `127.0.0.1:0` and returns the bound address.
pub async fn spawn_app(state: AppState) -> SocketAddr {
    let Ok(listener) = tokio::net::TcpListener::bind("127.0.0.1:0").await else {
        panic!("bind tcp listener");
    };
    let Ok(addr) = listener.local_addr() else {
        panic!("local addr");
    };

    tokio::spawn(async move {
        let _ = server::serve(listener, state).await;
    });
    addr
}

/// Starts a server on `127.0.0.1:0` that records observed messages.
pub async fn spawn_server() -> TestServer {
    let (tx, messages) = mpsc::unbounded_channel();
    let state = AppState::new(Arc::new(RecordingObserver { tx }));
    let registry = Arc::clone(&state.registry);
    let addr = spawn_app(state).await;

    TestServer {
        addr,
        registry,
        messages,
    }
}
