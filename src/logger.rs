//! Connection event logging and tracing subscriber setup.
//!
//! Connect, disconnect and error notices are rendered as one line with a
//! category label and an optional `from <peer>` suffix, then emitted through
//! `tracing` at the level matching the category.

use std::fmt;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use crate::config::{LogFormat, ServerConfig};

/// Category of a connection event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// A client connected and was registered.
    Success,
    /// A connection ended normally.
    Warning,
    /// An upgrade or transport failure.
    Error,
}

impl EventKind {
    /// Returns the label printed in front of the message.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Renders an event line, appending `from <peer>` when `peer` is non-empty.
#[must_use]
pub fn format_event(kind: EventKind, message: &str, peer: &str) -> String {
    if peer.is_empty() {
        format!("{}! {message}", kind.label())
    } else {
        format!("{}! {message} from {peer}", kind.label())
    }
}

/// Emits one connection event to the diagnostic stream.
pub fn log_event(kind: EventKind, message: &str, peer: &str) {
    let line = format_event(kind, message, peer);
    match kind {
        EventKind::Success => tracing::info!(category = %kind, peer, "{line}"),
        EventKind::Warning => tracing::warn!(category = %kind, peer, "{line}"),
        EventKind::Error => tracing::error!(category = %kind, peer, "{line}"),
    }
}

/// Logs the startup banner once the listener is bound.
pub fn announce_startup(addr: SocketAddr) {
    tracing::info!(%addr, "Server is running on port {}", addr.port());
}

/// Installs the global tracing subscriber.
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing(config: &ServerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.log_ansi);

    match config.log_format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}
