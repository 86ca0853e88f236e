//! Serenity implementation of the reaction platform.
//!
//! Every call goes through Serenity's HTTP client rather than the gateway cache. Member role
//! state in particular must be read fresh, since the cached member may predate role changes
//! made by other bots or moderators.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, EmojiId, GuildId, MessageId, RoleId, UserId},
    async_trait,
    http::{Http, HttpError},
};

use crate::{
    data::platform::ReactionPlatform,
    error::{resolution::ResolutionError, AppError},
    model::{
        discord::{DiscordChannel, DiscordMessage, GuildMember, GuildRole, MessageReactionState},
        emoji::ReactionEmoji,
    },
};

/// Reaction platform backed by the bot's Serenity HTTP client.
pub struct SerenityPlatform {
    http: Arc<Http>,
    current_user_id: u64,
}

impl SerenityPlatform {
    /// Creates a new platform instance.
    ///
    /// # Arguments
    /// - `http` - Serenity HTTP client shared with the gateway client
    /// - `current_user_id` - The bot's user ID, as reported by the ready event
    pub fn new(http: Arc<Http>, current_user_id: u64) -> Self {
        Self {
            http,
            current_user_id,
        }
    }
}

/// Maps a 404 response to `None`, keeping every other error.
fn not_found_as_none<T>(result: serenity::Result<T>) -> Result<Option<T>, AppError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(serenity::Error::Http(HttpError::UnsuccessfulRequest(response)))
            if response.status_code.as_u16() == 404 =>
        {
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

#[async_trait]
impl ReactionPlatform for SerenityPlatform {
    async fn fetch_channel(&self, channel_id: u64) -> Result<Option<DiscordChannel>, AppError> {
        let Some(channel) =
            not_found_as_none(self.http.get_channel(ChannelId::new(channel_id)).await)?
        else {
            return Ok(None);
        };

        let Some(guild_channel) = channel.guild() else {
            return Err(ResolutionError::NotGuildChannel { channel_id }.into());
        };

        Ok(Some(DiscordChannel::from_serenity(&guild_channel)))
    }

    async fn fetch_message(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<Option<DiscordMessage>, AppError> {
        let message = not_found_as_none(
            self.http
                .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
                .await,
        )?;

        Ok(message.as_ref().map(DiscordMessage::from_serenity))
    }

    async fn fetch_emoji(
        &self,
        guild_id: u64,
        emoji_id: u64,
    ) -> Result<Option<ReactionEmoji>, AppError> {
        let emoji = not_found_as_none(
            self.http
                .get_emoji(GuildId::new(guild_id), EmojiId::new(emoji_id))
                .await,
        )?;

        Ok(emoji.map(|e| ReactionEmoji::custom(e.id.get(), &e.name, e.animated)))
    }

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &ReactionEmoji,
    ) -> Result<(), AppError> {
        self.http
            .create_reaction(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &emoji.to_reaction_type(),
            )
            .await?;

        Ok(())
    }

    async fn list_reactions(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<Vec<MessageReactionState>, AppError> {
        let message = self
            .http
            .get_message(ChannelId::new(channel_id), MessageId::new(message_id))
            .await?;

        Ok(DiscordMessage::from_serenity(&message).reactions)
    }

    async fn fetch_member(
        &self,
        guild_id: u64,
        user_id: u64,
    ) -> Result<Option<GuildMember>, AppError> {
        let member = not_found_as_none(
            self.http
                .get_member(GuildId::new(guild_id), UserId::new(user_id))
                .await,
        )?;

        Ok(member.as_ref().map(GuildMember::from_serenity))
    }

    async fn fetch_role(
        &self,
        guild_id: u64,
        role_id: u64,
    ) -> Result<Option<GuildRole>, AppError> {
        let role = not_found_as_none(
            self.http
                .get_guild_role(GuildId::new(guild_id), RoleId::new(role_id))
                .await,
        )?;

        Ok(role.map(|role| GuildRole::from_serenity(guild_id, &role)))
    }

    async fn add_role_to_member(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(reason),
            )
            .await?;

        Ok(())
    }

    async fn remove_role_from_member(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
        reason: &str,
    ) -> Result<(), AppError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                Some(reason),
            )
            .await?;

        Ok(())
    }

    fn current_user_id(&self) -> u64 {
        self.current_user_id
    }
}
