//! Repository implementations

mod channel;
mod error;
mod mapping;

pub use channel::PgChannelRepository;
pub use mapping::PgMappingRepository;
