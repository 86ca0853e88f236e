//! Reaction notification models.
//!
//! Serenity delivers reaction adds and removes through separate `EventHandler` callbacks with
//! the same `Reaction` payload. They are folded into a single `ReactionNotification` tagged
//! with its `ReactionKind` so that one handler decides what to do for both.

use serenity::all::Reaction;

use crate::model::emoji::EmojiIdentity;

/// Whether a reaction was added or removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReactionKind {
    Add,
    Remove,
}

impl ReactionKind {
    /// Whether the reacting member should hold the mapped roles afterwards.
    pub fn desired_membership(self) -> bool {
        matches!(self, Self::Add)
    }
}

/// A reaction add or remove on a guild message.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionNotification {
    pub kind: ReactionKind,
    pub user_id: u64,
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub emoji: EmojiIdentity,
}

impl ReactionNotification {
    /// Converts a Serenity reaction event.
    ///
    /// # Returns
    /// - `Some(ReactionNotification)` - Reaction on a guild message by a known user
    /// - `None` - Reaction outside a guild, without a user, or of an unsupported emoji kind
    pub fn from_reaction(kind: ReactionKind, reaction: &Reaction) -> Option<Self> {
        Some(Self {
            kind,
            user_id: reaction.user_id?.get(),
            guild_id: reaction.guild_id?.get(),
            channel_id: reaction.channel_id.get(),
            message_id: reaction.message_id.get(),
            emoji: EmojiIdentity::from_reaction_type(&reaction.emoji)?,
        })
    }
}

/// Why a notification caused no role changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The message is not tracked.
    UntrackedMessage,
    /// The message is tracked but the emoji is not.
    UntrackedEmoji,
    /// The reaction was placed or removed by the bot itself.
    OwnReaction,
    /// The user is no longer a member of the guild.
    MemberNotFound,
    /// Fetching the member failed.
    MemberLookupFailed,
}

/// Result of reconciling one notification.
#[derive(Debug, Clone, PartialEq)]
pub enum ReconcileOutcome {
    Ignored(IgnoreReason),
    Reconciled {
        /// Roles granted to the member.
        granted: Vec<u64>,
        /// Roles revoked from the member.
        revoked: Vec<u64>,
        /// Roles whose grant or revoke request failed.
        failed: Vec<u64>,
    },
}
