//! SteamID64 - the stable numeric Steam account identifier
//!
//! Stored and compared as a string: the webhook payloads, the vanity
//! resolver and the database all carry it as text, and 64-bit ids are
//! not safe in every JSON consumer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stable Steam account identifier (SteamID64).
///
/// Always the resolved id, never the raw vanity name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SteamId64(String);

impl SteamId64 {
    /// SteamID64 values are 17 digits and share this prefix
    /// (the universe/account-type bits of the id layout).
    const PREFIX: &'static str = "7656";
    const DIGITS: usize = 17;

    /// Create a SteamId64 from a value already known to be resolved
    /// (e.g. a stored row).
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Parse user-supplied text as a SteamID64.
    ///
    /// Accepts exactly a 17-digit string with the standard prefix. Used
    /// by the resolver to short-circuit inputs that are already ids.
    pub fn parse(s: &str) -> Result<Self, SteamIdParseError> {
        if s.len() == Self::DIGITS
            && s.starts_with(Self::PREFIX)
            && s.bytes().all(|b| b.is_ascii_digit())
        {
            Ok(Self(s.to_string()))
        } else {
            Err(SteamIdParseError::InvalidFormat)
        }
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

/// Error when parsing a SteamID64 from string
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SteamIdParseError {
    #[error("invalid SteamID64 format")]
    InvalidFormat,
}

impl fmt::Display for SteamId64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SteamId64 {
    type Err = SteamIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SteamId64::parse(s)
    }
}
