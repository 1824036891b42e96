//! Service layer error types
//!
//! Every variant's display text doubles as the chat reply shown in the
//! originating channel, so the wording here is user-facing.

use thiserror::Error;

use roze_core::DomainError;

/// Service layer error type
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Interaction type this service does not handle; the only error
    /// that surfaces as an HTTP rejection instead of a chat reply.
    #[error("Bad data")]
    UnsupportedInteraction,

    /// Interaction payload without a field the handler needs
    #[error("Interaction is missing {0}")]
    MissingField(&'static str),

    #[error("Unrecognized command: {0}")]
    UnrecognizedCommand(String),

    #[error("Command {0} is missing options")]
    MissingOptions(String),

    #[error("Unrecognized option: {0}")]
    UnrecognizedOption(String),

    /// Vanity name resolution failed; echoes the offending input
    #[error("Error fetching SteamID64 for username: {0}. Please check spelling and try again.")]
    IdentityNotFound(String),

    /// Channel registration could not be persisted
    #[error("Error starting. Please try again.")]
    StartFailed,

    /// Identity claim could not be persisted
    #[error("Error saving your claim. Please try again.")]
    ClaimFailed,

    /// Domain errors from flows outside the interaction path
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type alias for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
