//! Emoji identity and reaction emoji domain models.
//!
//! An `EmojiIdentity` is the key reactions are tracked by. Unicode emoji are identified by
//! their display name, custom guild emoji by their snowflake id. The custom emoji's name and
//! animated flag never take part in identity: Discord reports them inconsistently between
//! gateway events and REST responses, and the id alone is unique.

use std::{fmt, num::NonZeroU64};

use serenity::all::{EmojiId, ReactionType};

/// Identity key for a reaction.
///
/// The two kinds never compare equal, even if a custom emoji happens to be named like a
/// unicode emoji.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmojiIdentity {
    /// Standard emoji identified by its unicode string (e.g. "✅").
    Unicode(String),
    /// Custom guild emoji identified by its Discord emoji ID.
    Custom(u64),
}

impl EmojiIdentity {
    /// Parses a react map key from the reaction config.
    ///
    /// Accepted forms:
    /// - all digits: custom emoji ID (e.g. `"123456789012345678"`)
    /// - mention syntax: `"<:name:id>"` or `"<a:name:id>"`
    /// - anything else non-empty: unicode emoji name
    ///
    /// # Arguments
    /// - `key` - Raw emoji key from the config file
    ///
    /// # Returns
    /// - `Some(EmojiIdentity)` - Parsed identity
    /// - `None` - Key is empty, a malformed mention, or emoji ID 0
    pub fn parse_key(key: &str) -> Option<Self> {
        if key.is_empty() {
            return None;
        }

        if key.bytes().all(|b| b.is_ascii_digit()) {
            return parse_emoji_id(key);
        }

        if let Some(inner) = key.strip_prefix('<').and_then(|k| k.strip_suffix('>')) {
            let inner = inner.strip_prefix('a').unwrap_or(inner);
            let mut parts = inner.split(':');
            return match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(""), Some(_name), Some(id), None) => parse_emoji_id(id),
                _ => None,
            };
        }

        Some(Self::Unicode(key.to_string()))
    }

    /// Converts a Serenity reaction type into an identity.
    ///
    /// Returns `None` for reaction kinds other than unicode or custom emoji.
    pub fn from_reaction_type(reaction_type: &ReactionType) -> Option<Self> {
        match reaction_type {
            ReactionType::Unicode(name) => Some(Self::Unicode(name.clone())),
            ReactionType::Custom { id, .. } => Some(Self::Custom(id.get())),
            _ => None,
        }
    }
}

/// Snowflakes are never zero, so an ID of 0 is rejected along with anything unparseable.
fn parse_emoji_id(id: &str) -> Option<EmojiIdentity> {
    id.parse::<NonZeroU64>()
        .ok()
        .map(|id| EmojiIdentity::Custom(id.get()))
}

impl fmt::Display for EmojiIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unicode(name) => write!(f, "{}", name),
            Self::Custom(id) => write!(f, "<:_:{}>", id),
        }
    }
}

/// An emoji with everything Discord needs to place it as a reaction.
///
/// Custom emoji reactions are requested as `name:id`, so the name has to be looked up from
/// the guild's emoji list before the bot can react with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReactionEmoji {
    pub identity: EmojiIdentity,
    /// Custom emoji name, `None` for unicode emoji.
    pub name: Option<String>,
    pub animated: bool,
}

impl ReactionEmoji {
    pub fn unicode(name: &str) -> Self {
        Self {
            identity: EmojiIdentity::Unicode(name.to_string()),
            name: None,
            animated: false,
        }
    }

    pub fn custom(id: u64, name: &str, animated: bool) -> Self {
        Self {
            identity: EmojiIdentity::Custom(id),
            name: Some(name.to_string()),
            animated,
        }
    }

    /// Converts into the Serenity reaction type used by the create reaction endpoint.
    pub fn to_reaction_type(&self) -> ReactionType {
        match &self.identity {
            EmojiIdentity::Unicode(name) => ReactionType::Unicode(name.clone()),
            EmojiIdentity::Custom(id) => ReactionType::Custom {
                animated: self.animated,
                id: EmojiId::new(*id),
                name: self.name.clone(),
            },
        }
    }
}
