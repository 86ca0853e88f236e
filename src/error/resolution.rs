use thiserror::Error;

use crate::model::emoji::EmojiIdentity;

/// A configured Discord object could not be resolved during startup reconciliation.
///
/// Each variant names the locator that failed so the operator can correct the reaction
/// config. Any of these aborts the whole index build.
#[derive(Error, Debug)]
pub enum ResolutionError {
    /// The configured channel does not exist or the bot cannot see it.
    #[error("Channel {channel_id} not found")]
    ChannelNotFound { channel_id: u64 },

    /// The configured channel exists but does not belong to a guild (e.g. a DM).
    #[error("Channel {channel_id} is not a guild channel")]
    NotGuildChannel { channel_id: u64 },

    /// The configured message does not exist in its channel.
    #[error("Message {message_id} not found in channel {channel_id}")]
    MessageNotFound { channel_id: u64, message_id: u64 },

    /// A custom emoji id is not one of the guild's emojis.
    #[error("Custom emoji {emoji_id} not found in guild {guild_id}")]
    EmojiNotFound { guild_id: u64, emoji_id: u64 },

    /// A tracked reaction is missing from the message after seeding.
    #[error("Couldn't find reaction for emoji {emoji} on message {message_id}")]
    ReactionNotFound {
        message_id: u64,
        emoji: EmojiIdentity,
    },

    /// A configured role does not exist in the message's guild.
    #[error("Role {role_id} not found in guild {guild_id}")]
    RoleNotFound { guild_id: u64, role_id: u64 },
}
