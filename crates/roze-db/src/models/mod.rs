//! Database row models

mod mapping;
mod registration;

pub use mapping::MappingModel;
pub use registration::RegistrationModel;
