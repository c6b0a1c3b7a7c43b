//! Server configuration loaded from environment variables.
//!
//! Only diagnostics are configurable (optionally through a `.env` file via
//! `dotenvy`). The listen address is fixed at `0.0.0.0:3000`.

use std::net::{Ipv4Addr, SocketAddr};
use std::str::FromStr;

use crate::error::ServerError;

/// Port the server always listens on.
pub const DEFAULT_PORT: u16 = 3000;

/// Output format of the diagnostic stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ServerError::Config(format!(
                "LOG_FORMAT must be `pretty` or `json`, got `{other}`"
            ))),
        }
    }
}

/// Top-level server configuration.
///
/// Loaded once at startup via [`ServerConfig::from_env`].
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind the HTTP server to.
    pub listen_addr: SocketAddr,

    /// Diagnostic output format.
    pub log_format: LogFormat,

    /// Whether diagnostic lines carry ANSI colors.
    pub log_ansi: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from((Ipv4Addr::UNSPECIFIED, DEFAULT_PORT)),
            log_format: LogFormat::default(),
            log_ansi: true,
        }
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns [`ServerError::Config`] if `LOG_FORMAT` is set to an
    /// unknown value.
    pub fn from_env() -> Result<Self, ServerError> {
        dotenvy::dotenv().ok();

        let log_format = match std::env::var("LOG_FORMAT") {
            Ok(v) => v.parse()?,
            Err(_) => LogFormat::default(),
        };
        let log_ansi = parse_env_bool("LOG_ANSI", true);

        Ok(Self {
            log_format,
            log_ansi,
            ..Self::default()
        })
    }
}

/// Parses an environment variable as a boolean. Accepts `"true"`, `"1"`,
/// `"false"`, `"0"` (case-insensitive). Returns `default` otherwise.
fn parse_env_bool(key: &str, default: bool) -> bool {
    parse_bool(std::env::var(key).ok().as_deref()).unwrap_or(default)
}

fn parse_bool(value: Option<&str>) -> Option<bool> {
    match value?.to_ascii_lowercase().as_str() {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}
