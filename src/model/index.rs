//! Synchronization index models.
//!
//! The index is built once by `ReactionRoleService::build_index` and is read-only afterwards.
//! It is owned by the bot handler and handed to the service by reference for each reaction
//! notification.

use std::collections::HashMap;

use crate::model::{discord::GuildRole, emoji::EmojiIdentity};

/// A tracked message with its resolved emoji to role mapping.
///
/// Every emoji in `reactions` was confirmed present on the message when the entry was built.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedMessage {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
    pub reactions: HashMap<EmojiIdentity, Vec<GuildRole>>,
}

impl TrackedMessage {
    /// Gets the roles granted by an emoji on this message.
    ///
    /// # Returns
    /// - `Some(&[GuildRole])` - Non-empty role list for a tracked emoji
    /// - `None` - Emoji is not tracked on this message
    pub fn roles_for(&self, emoji: &EmojiIdentity) -> Option<&[GuildRole]> {
        self.reactions.get(emoji).map(Vec::as_slice)
    }
}

/// All tracked messages, keyed by message ID.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncIndex {
    messages: HashMap<u64, TrackedMessage>,
}

impl SyncIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry, replacing any previous entry for the same message.
    ///
    /// Configuration normalization rejects duplicate messages, so replacement does not happen
    /// for indexes built from a normalized config.
    pub fn insert(&mut self, entry: TrackedMessage) {
        self.messages.insert(entry.message_id, entry);
    }

    pub fn get(&self, message_id: u64) -> Option<&TrackedMessage> {
        self.messages.get(&message_id)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
