//! Shared application state injected into the Axum handler.

use std::sync::Arc;

use crate::domain::ConnectionRegistry;
use crate::ws::connection::ClientHandle;
use crate::ws::observer::{DiagnosticObserver, MessageObserver};

/// Shared application state available to the handler via Axum's `State`
/// extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Live connections keyed by client identifier.
    pub registry: Arc<ConnectionRegistry<ClientHandle>>,
    /// Consumer of decoded client messages.
    pub observer: Arc<dyn MessageObserver>,
}

impl AppState {
    /// Creates state with an empty registry and the given observer.
    #[must_use]
    pub fn new(observer: Arc<dyn MessageObserver>) -> Self {
        Self {
            registry: Arc::new(ConnectionRegistry::new()),
            observer,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(DiagnosticObserver))
    }
}
