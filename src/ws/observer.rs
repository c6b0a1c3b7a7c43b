//! Consumers of decoded client messages.

use std::fmt::Debug;

use crate::domain::ClientId;

/// Receives every text payload read from a client.
///
/// Called from the connection's read loop; implementations must not block.
pub trait MessageObserver: Send + Sync + Debug {
    /// Handles one decoded message from `client_id`.
    fn on_message(&self, client_id: &ClientId, text: &str);
}

/// Writes received messages to the diagnostic stream and does nothing else.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiagnosticObserver;

impl MessageObserver for DiagnosticObserver {
    fn on_message(&self, client_id: &ClientId, text: &str) {
        tracing::info!(%client_id, "{text}");
    }
}
