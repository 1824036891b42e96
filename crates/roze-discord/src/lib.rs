//! # roze-discord
//!
//! Discord integration plumbing: Ed25519 verification of interaction
//! callbacks, and a minimal REST client for posting messages into a
//! channel with bot-token auth.

mod client;
mod verify;

pub use client::{DiscordApiError, DiscordClient};
pub use verify::{InteractionVerifier, SignatureError};
