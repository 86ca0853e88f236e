//! Test factories for creating Serenity reaction objects.
//!
//! `Reaction` is the gateway event payload for reaction adds and removes, `MessageReaction`
//! is the per-emoji summary listed on a fetched message.

use serenity::all::{MessageReaction, Reaction};

/// Emoji carried by a test reaction.
#[derive(Debug, Clone, Copy)]
pub enum TestEmoji<'a> {
    /// Unicode emoji by display string.
    Unicode(&'a str),
    /// Custom guild emoji by ID and name.
    Custom { id: u64, name: &'a str, animated: bool },
}

impl TestEmoji<'_> {
    fn to_json(self) -> serde_json::Value {
        match self {
            TestEmoji::Unicode(name) => serde_json::json!({ "id": null, "name": name }),
            TestEmoji::Custom { id, name, animated } => serde_json::json!({
                "id": id.to_string(),
                "name": name,
                "animated": animated,
            }),
        }
    }
}

/// Creates a test reaction add/remove event.
///
/// # Arguments
/// - `channel_id` - Channel containing the message
/// - `message_id` - Message reacted to
/// - `user_id` - User who reacted
/// - `guild_id` - Guild containing the channel, `None` for a DM reaction
/// - `emoji` - Emoji reacted with
///
/// # Panics
/// - If the JSON cannot be deserialized into a Reaction (indicates invalid test data)
pub fn create_test_reaction(
    channel_id: u64,
    message_id: u64,
    user_id: u64,
    guild_id: Option<u64>,
    emoji: TestEmoji<'_>,
) -> Reaction {
    serde_json::from_value(serde_json::json!({
        "channel_id": channel_id.to_string(),
        "message_id": message_id.to_string(),
        "user_id": user_id.to_string(),
        "guild_id": guild_id.map(|id| id.to_string()),
        "emoji": emoji.to_json(),
        "burst": false,
        "burst_colors": [],
        "type": 0,
    }))
    .expect("Failed to create test reaction - invalid JSON structure")
}

/// Creates a test reaction summary as listed on a message.
///
/// # Arguments
/// - `emoji` - Emoji of the reaction
/// - `count` - Number of users who reacted
/// - `me` - Whether the bot is one of them
///
/// # Panics
/// - If the JSON cannot be deserialized into a MessageReaction (indicates invalid test data)
pub fn create_test_message_reaction(emoji: TestEmoji<'_>, count: u64, me: bool) -> MessageReaction {
    serde_json::from_value(serde_json::json!({
        "count": count,
        "count_details": { "burst": 0, "normal": count },
        "me": me,
        "me_burst": false,
        "emoji": emoji.to_json(),
        "burst_colors": [],
    }))
    .expect("Failed to create test message reaction - invalid JSON structure")
}
