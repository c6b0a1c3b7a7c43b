//! WebSocket layer: upgrade handling, connection lifecycle, messages.
//!
//! The endpoint at `/` upgrades every request to a WebSocket, registers the
//! connection under a fresh [`crate::domain::ClientId`] and logs what the
//! client sends.

pub mod connection;
pub mod handler;
pub mod messages;
pub mod observer;
