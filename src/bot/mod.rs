//! Discord bot integration.
//!
//! The bot connects to the Discord gateway, builds the reaction role index once the
//! connection is ready, and then reconciles member roles for every reaction added to or
//! removed from a tracked message.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability so reactions carry guild context
//! - `GUILD_MESSAGE_REACTIONS` - Receive reaction add and remove events
//!
//! Neither intent is privileged. The bot additionally needs the Manage Roles permission in
//! each guild, and its highest role must sit above every role it hands out.

pub mod handler;
pub mod start;
