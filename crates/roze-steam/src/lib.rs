//! # roze-steam
//!
//! Resolves user-supplied Steam vanity names to stable SteamID64s using
//! the community profile XML endpoint (`/id/{name}?xml=1`). Inputs that
//! already look like a SteamID64 short-circuit without a network call.
//!
//! Every failure mode - network error, non-success status, profile
//! without an id - collapses into the single `ResolveError::NotFound`
//! outcome; the cause is logged here and never surfaced to callers.

mod resolver;

pub use resolver::{LookupError, SteamWebResolver};
