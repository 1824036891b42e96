//! Value objects

mod roze_id;
mod steam_id;

pub use roze_id::RozeId;
pub use steam_id::{SteamId64, SteamIdParseError};
