//! Integration test utilities for the roze webhook server
//!
//! Provides helpers for spawning a test server against a live
//! PostgreSQL database and sending correctly signed interaction
//! callbacks.

pub mod helpers;

pub use helpers::*;
