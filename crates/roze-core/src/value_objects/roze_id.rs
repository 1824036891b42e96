//! Roze id - the short public token identifying a registered channel
//!
//! A roze id is embedded in the webhook URL handed out on registration,
//! so it must be short enough to paste into a game client. Uniqueness is
//! enforced by the storage layer, not here.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Short opaque public identifier for a registered channel.
///
/// Generated once on registration and never regenerated.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RozeId(String);

impl RozeId {
    /// Number of characters in a generated id (two random bytes, hex).
    pub const LENGTH: usize = 4;

    /// Create a RozeId from an existing string (e.g. a stored row).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a new random roze id.
    pub fn generate() -> Self {
        const CHARSET: &[u8] = b"0123456789abcdef";

        let mut rng = rand::thread_rng();
        let id = (0..Self::LENGTH)
            .map(|_| {
                let idx = rng.gen_range(0..CHARSET.len());
                CHARSET[idx] as char
            })
            .collect();
        Self(id)
    }

    /// Get the id as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, returning the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for RozeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RozeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
