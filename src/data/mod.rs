//! Discord access layer.
//!
//! The synchronizer talks to Discord only through the `ReactionPlatform` trait. `discord`
//! provides the Serenity-backed implementation used by the bot; tests swap in an in-memory
//! implementation that records every request.

pub mod discord;
pub mod platform;
