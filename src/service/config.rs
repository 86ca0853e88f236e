use std::collections::HashSet;

use crate::{
    error::config::ConfigError,
    model::{
        config::{MessageConfig, RawMessageConfig, TrackedReactionConfig},
        emoji::EmojiIdentity,
    },
};

/// Normalizes operator-supplied reaction config into `MessageConfig`s.
///
/// Performs no Discord access; only shape checks and shorthand expansion.
pub struct ConfigResolver;

impl ConfigResolver {
    /// Normalizes raw message records.
    ///
    /// Single role values are wrapped into a one-element list, lists pass through unchanged,
    /// and emoji keys are parsed into identities. Record and react map order is preserved.
    ///
    /// # Arguments
    /// - `raw` - Records deserialized from the reaction config file
    ///
    /// # Returns
    /// - `Ok(Vec<MessageConfig>)` - Normalized records in input order
    /// - `Err(ConfigError::DuplicateMessage)` - Same message configured twice
    /// - `Err(ConfigError::EmptyReactMap)` - Record tracks no emoji
    /// - `Err(ConfigError::InvalidEmoji)` - Emoji key is empty or malformed
    /// - `Err(ConfigError::DuplicateEmoji)` - Two keys resolve to the same emoji
    /// - `Err(ConfigError::EmptyRoleList)` - Emoji maps to an empty role list
    pub fn normalize(raw: Vec<RawMessageConfig>) -> Result<Vec<MessageConfig>, ConfigError> {
        let mut seen_messages = HashSet::new();
        let mut configs = Vec::with_capacity(raw.len());

        for record in raw {
            let message_id = record.message.get();

            if !seen_messages.insert(message_id) {
                return Err(ConfigError::DuplicateMessage(message_id));
            }

            configs.push(Self::normalize_message(record)?);
        }

        Ok(configs)
    }

    fn normalize_message(record: RawMessageConfig) -> Result<MessageConfig, ConfigError> {
        let message_id = record.message.get();

        if record.react_map.is_empty() {
            return Err(ConfigError::EmptyReactMap(message_id));
        }

        let mut reactions: Vec<TrackedReactionConfig> = Vec::with_capacity(record.react_map.len());

        for (key, roles) in record.react_map {
            let emoji =
                EmojiIdentity::parse_key(&key).ok_or_else(|| ConfigError::InvalidEmoji {
                    message_id,
                    key: key.clone(),
                })?;

            if reactions.iter().any(|r| r.emoji == emoji) {
                return Err(ConfigError::DuplicateEmoji { message_id, key });
            }

            let role_ids = roles.into_role_ids();
            if role_ids.is_empty() {
                return Err(ConfigError::EmptyRoleList { message_id, key });
            }

            reactions.push(TrackedReactionConfig { emoji, role_ids });
        }

        Ok(MessageConfig {
            channel_id: record.channel.get(),
            message_id,
            reactions,
        })
    }
}
