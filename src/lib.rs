//! # ws-registry
//!
//! Minimal WebSocket endpoint that assigns every client a random
//! identifier and tracks live connections in a shared registry.
//!
//! ## Architecture
//!
//! ```text
//! Clients (WebSocket on GET /)
//!     │
//!     ├── WS Handler (ws/)
//!     │     upgrade → register → acknowledge → read loop → cleanup
//!     │
//!     ├── ConnectionRegistry (domain/)
//!     │     ClientId → ClientHandle, one exclusion lock
//!     │
//!     └── Event logger (logger)
//! ```

pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod logger;
pub mod server;
pub mod ws;
