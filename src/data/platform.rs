use serenity::async_trait;

use crate::{
    error::AppError,
    model::{
        discord::{DiscordChannel, DiscordMessage, GuildMember, GuildRole, MessageReactionState},
        emoji::ReactionEmoji,
    },
};

/// Discord operations the reaction-role synchronizer depends on.
///
/// Lookups return `Ok(None)` when the object does not exist (or the bot cannot see it) and
/// `Err` only for transport or API failures, so callers can treat a missing object as an
/// expected outcome.
#[async_trait]
pub trait ReactionPlatform: Send + Sync {
    /// Fetches a guild channel by ID.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordChannel))` - Channel exists and belongs to a guild
    /// - `Ok(None)` - Channel does not exist or is not visible to the bot
    /// - `Err(AppError::ResolutionErr)` - Channel exists but is not a guild channel
    /// - `Err(AppError::DiscordErr)` - Discord API request failed
    async fn fetch_channel(&self, channel_id: u64) -> Result<Option<DiscordChannel>, AppError>;

    /// Fetches a message within a channel, including its current reactions.
    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<Option<DiscordMessage>, AppError>;

    /// Looks up a custom emoji in a guild to get the name needed to react with it.
    async fn fetch_emoji(
        &self,
        guild_id: u64,
        emoji_id: u64,
    ) -> Result<Option<ReactionEmoji>, AppError>;

    /// Reacts to a message as the bot. Reacting with an emoji the bot already placed is a no-op.
    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &ReactionEmoji,
    ) -> Result<(), AppError>;

    /// Lists the reactions currently present on a message.
    async fn list_reactions(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<Vec<MessageReactionState>, AppError>;

    /// Fetches a member with fresh role state, bypassing any cached copy.
    async fn fetch_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<GuildMember>, AppError>;

    /// Fetches a role by ID within a guild.
    async fn fetch_role(&self, guild_id: u64, role_id: u64)
        -> Result<Option<GuildRole>, AppError>;

    /// Grants a role to a member.
    async fn add_role_to_member(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError>;

    /// Revokes a role from a member.
    async fn remove_role_from_member(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError>;

    /// The bot's own user ID.
    fn current_user_id(&self) -> u64;
}
