//! # roze-service
//!
//! Application layer: routes parsed interactions through the command
//! table and implements the start/iam handlers on top of the ports from
//! `roze-core`.

pub mod dto;
pub mod services;

// Re-export commonly used types at crate root
pub use dto::{
    CommandData, CommandOption, GameUpdate, Interaction, InteractionKind, InteractionReply,
    Member, OptionValue, User,
};
pub use services::{
    IdentityService, InteractionService, NotifyService, RegistrationService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult,
};
