//! Domain layer: client identity and the live connection registry.
//!
//! This module holds the only process-wide mutable state of the server,
//! the [`ConnectionRegistry`], together with the [`ClientId`] keys it is
//! indexed by.

pub mod client_id;
pub mod connection_registry;

pub use client_id::ClientId;
pub use connection_registry::ConnectionRegistry;
