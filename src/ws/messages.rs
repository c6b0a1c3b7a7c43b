//! WebSocket message types.
//!
//! The server sends exactly one structured message, the
//! [`Acknowledgement`]. Client messages carry no schema and are decoded to
//! text as-is.

use serde::Serialize;

use crate::domain::ClientId;

/// Discriminator value of the acknowledgement message.
pub const ACK_TYPE: u8 = 0;

/// Status code carried by a successful acknowledgement.
pub const ACK_STATUS_OK: u16 = 200;

/// Server → client message sent once right after registration.
///
/// Serializes as `{"type":0,"status":200,"id":"<client id>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    /// Message type discriminator.
    #[serde(rename = "type")]
    pub msg_type: u8,
    /// Status code.
    pub status: u16,
    /// Identifier assigned to the connection.
    pub id: ClientId,
}

impl Acknowledgement {
    /// Builds the acknowledgement for a newly registered client.
    #[must_use]
    pub const fn new(id: ClientId) -> Self {
        Self {
            msg_type: ACK_TYPE,
            status: ACK_STATUS_OK,
            id,
        }
    }
}

/// Decodes a raw client payload to text.
///
/// Invalid UTF-8 sequences are replaced rather than rejected.
#[must_use]
pub fn decode_payload(payload: &[u8]) -> String {
    String::from_utf8_lossy(payload).into_owned()
}
