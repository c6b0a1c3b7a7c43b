//! Randomly generated client identifier.
//!
//! [`ClientId`] is a newtype wrapper around a 9-letter string drawn from the
//! 52-letter Latin alphabet. It is used only as the key of the
//! [`super::ConnectionRegistry`] and echoed to the client in the
//! acknowledgement message.

use std::borrow::Borrow;
use std::fmt;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// Number of characters in every generated identifier.
pub const CLIENT_ID_LEN: usize = 9;

/// Characters an identifier is drawn from: `a-z` followed by `A-Z`.
pub const ALPHABET: &[u8; 52] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Opaque identifier naming one live connection.
///
/// Identifiers are random, not unique by construction. Collision handling
/// is the registry's job (see [`super::ConnectionRegistry::register_unique`]).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ClientId(String);

impl ClientId {
    /// Generates a new identifier from the thread-local generator.
    ///
    /// The generator is seeded once per thread from the operating system and
    /// is never reseeded here.
    #[must_use]
    pub fn generate() -> Self {
        Self::generate_with(&mut rand::rng())
    }

    /// Generates a new identifier from the given random source.
    #[must_use]
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let id = (0..CLIENT_ID_LEN)
            .filter_map(|_| ALPHABET.choose(&mut *rng).copied().map(char::from))
            .collect();
        Self(id)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ClientId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ClientId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}
