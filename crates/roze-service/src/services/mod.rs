//! Service layer

mod context;
mod error;
mod identity;
mod interaction;
mod notify;
mod registration;

pub use context::{ContextBuildError, ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use identity::IdentityService;
pub use interaction::InteractionService;
pub use notify::NotifyService;
pub use registration::RegistrationService;

#[cfg(test)]
pub(crate) mod testing;
