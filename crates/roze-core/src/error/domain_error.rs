//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Channel not registered: {0}")]
    ChannelNotFound(String),

    #[error("Unknown roze id: {0}")]
    RozeIdNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if this is a not-found error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ChannelNotFound(_) | Self::RozeIdNotFound(_))
    }
}
