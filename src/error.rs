//! Server error types.
//!
//! [`ServerError`] covers both fatal startup failures, which end the
//! process, and per-connection failures, which are logged and contained in
//! the connection task that produced them.

use std::net::SocketAddr;

/// Server-side error enum.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The listening socket could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address the server tried to bind.
        addr: SocketAddr,
        /// Underlying socket error.
        #[source]
        source: std::io::Error,
    },

    /// The accept loop stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// Invalid configuration value.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A message could not be serialized to JSON.
    #[error("failed to encode message: {0}")]
    Encode(#[from] serde_json::Error),

    /// A WebSocket frame could not be sent or received.
    #[error("websocket transport error: {0}")]
    Transport(#[from] axum::Error),
}
