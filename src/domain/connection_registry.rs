//! Shared map of live connections keyed by [`ClientId`].
//!
//! [`ConnectionRegistry`] stores one handle per connected client behind a
//! single [`tokio::sync::Mutex`]. Every mutation takes the lock for the
//! duration of one map operation; there is no ordering guarantee between
//! mutations issued by different connection tasks.

use std::collections::HashMap;

use tokio::sync::Mutex;

use super::ClientId;

/// Registry of live connections.
///
/// Generic over the stored handle so the locking discipline can be exercised
/// without real sockets. The server stores a
/// [`crate::ws::connection::ClientHandle`] per entry.
///
/// # Concurrency
///
/// - All mutations are serialized through one exclusion lock.
/// - A registration and a deregistration from different tasks may
///   interleave in any order.
#[derive(Debug)]
pub struct ConnectionRegistry<H> {
    clients: Mutex<HashMap<ClientId, H>>,
}

impl<H> ConnectionRegistry<H> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Inserts `handle` under `id`.
    ///
    /// An existing entry with the same identifier is silently replaced and
    /// the displaced handle is returned to the caller.
    pub async fn register(&self, id: ClientId, handle: H) -> Option<H> {
        self.clients.lock().await.insert(id, handle)
    }

    /// Generates a fresh identifier and inserts `handle` under it.
    ///
    /// Generation is retried while the candidate names a live entry, and the
    /// check and insert happen under one lock acquisition, so a live
    /// connection is never overwritten.
    pub async fn register_unique(&self, handle: H) -> ClientId {
        self.register_unique_with(handle, ClientId::generate).await
    }

    /// Like [`Self::register_unique`] but draws candidates from `next_id`.
    pub async fn register_unique_with<F>(&self, handle: H, mut next_id: F) -> ClientId
    where
        F: FnMut() -> ClientId,
    {
        let mut clients = self.clients.lock().await;
        let mut id = next_id();
        while clients.contains_key(&id) {
            tracing::debug!(client_id = %id, "generated client id collides, retrying");
            id = next_id();
        }
        clients.insert(id.clone(), handle);
        id
    }

    /// Removes the entry for `id`, returning its handle.
    ///
    /// Returns `None` if the identifier is not registered.
    pub async fn deregister(&self, id: &ClientId) -> Option<H> {
        self.clients.lock().await.remove(id)
    }

    /// Returns `true` if `id` currently names a live entry.
    pub async fn contains(&self, id: &str) -> bool {
        self.clients.lock().await.contains_key(id)
    }

    /// Returns the number of live entries.
    pub async fn len(&self) -> usize {
        self.clients.lock().await.len()
    }

    /// Returns `true` if no connection is registered.
    pub async fn is_empty(&self) -> bool {
        self.clients.lock().await.is_empty()
    }
}

impl<H> Default for ConnectionRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
