//! Discord domain models.
//!
//! Narrow views of the Serenity objects the synchronizer works with. Conversion happens at the
//! platform boundary so the service layer only deals with plain `u64` IDs and never depends on
//! Serenity's gateway or cache types.

use serenity::all::{GuildChannel, Member, Message, MessageReaction, Role};

use crate::model::emoji::EmojiIdentity;

/// A guild text channel holding a tracked message.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordChannel {
    pub channel_id: u64,
    pub guild_id: u64,
    pub name: String,
}

impl DiscordChannel {
    pub fn from_serenity(channel: &GuildChannel) -> Self {
        Self {
            channel_id: channel.id.get(),
            guild_id: channel.guild_id.get(),
            name: channel.name.clone(),
        }
    }
}

/// A reaction currently present on a message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageReactionState {
    pub emoji: EmojiIdentity,
    /// Total number of users who reacted with this emoji.
    pub count: u64,
    /// Whether the bot itself has reacted with this emoji.
    pub me: bool,
}

impl MessageReactionState {
    /// Converts a Serenity message reaction, skipping unsupported reaction kinds.
    pub fn from_serenity(reaction: &MessageReaction) -> Option<Self> {
        Some(Self {
            emoji: EmojiIdentity::from_reaction_type(&reaction.reaction_type)?,
            count: reaction.count,
            me: reaction.me,
        })
    }
}

/// A message and the reactions present on it.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordMessage {
    pub message_id: u64,
    pub channel_id: u64,
    pub reactions: Vec<MessageReactionState>,
}

impl DiscordMessage {
    pub fn from_serenity(message: &Message) -> Self {
        Self {
            message_id: message.id.get(),
            channel_id: message.channel_id.get(),
            reactions: message
                .reactions
                .iter()
                .filter_map(MessageReactionState::from_serenity)
                .collect(),
        }
    }

    /// Returns true if the bot has already reacted with the given emoji.
    pub fn has_own_reaction(&self, emoji: &EmojiIdentity) -> bool {
        self.reactions.iter().any(|r| r.me && &r.emoji == emoji)
    }
}

/// A role within a guild.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildRole {
    pub role_id: u64,
    pub guild_id: u64,
    pub name: String,
}

impl GuildRole {
    /// Converts a Serenity role fetched from the given guild.
    ///
    /// The guild is passed explicitly since roles deserialized from some endpoints carry a
    /// default guild ID.
    pub fn from_serenity(guild_id: u64, role: &Role) -> Self {
        Self {
            role_id: role.id.get(),
            guild_id,
            name: role.name.clone(),
        }
    }
}

/// A user's membership in a guild, with the roles they currently hold.
#[derive(Debug, Clone, PartialEq)]
pub struct GuildMember {
    pub guild_id: u64,
    pub user_id: u64,
    pub role_ids: Vec<u64>,
}

impl GuildMember {
    pub fn from_serenity(member: &Member) -> Self {
        Self {
            guild_id: member.guild_id.get(),
            user_id: member.user.id.get(),
            role_ids: member.roles.iter().map(|r| r.get()).collect(),
        }
    }

    pub fn has_role(&self, role_id: u64) -> bool {
        self.role_ids.contains(&role_id)
    }
}
