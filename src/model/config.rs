//! Reaction config models.
//!
//! `RawMessageConfig` mirrors one record of the operator's `config.json`:
//!
//! ```json
//! [
//!   {
//!     "channel": "111111111111111111",
//!     "message": "222222222222222222",
//!     "reactMap": { "✅": "333333333333333333", "🔥": ["444", "555"] }
//!   }
//! ]
//! ```
//!
//! `MessageConfig` is the normalized form produced by `ConfigResolver`, with parsed emoji
//! identities and every role value expanded to a list.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serenity::all::{ChannelId, MessageId, RoleId};

use crate::model::emoji::EmojiIdentity;

/// A react map value: either a single role or a list of roles.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum RoleIdOrList {
    Single(RoleId),
    List(Vec<RoleId>),
}

impl RoleIdOrList {
    /// Expands the value into an ordered list of role IDs.
    pub fn into_role_ids(self) -> Vec<u64> {
        match self {
            Self::Single(id) => vec![id.get()],
            Self::List(ids) => ids.into_iter().map(|id| id.get()).collect(),
        }
    }
}

/// One message record as written by the operator.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawMessageConfig {
    pub channel: ChannelId,
    pub message: MessageId,

    // IndexMap keeps the operator's order, which is the order reactions are seeded in
    #[serde(rename = "reactMap")]
    pub react_map: IndexMap<String, RoleIdOrList>,
}

/// A tracked emoji on a message and the roles it grants.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedReactionConfig {
    pub emoji: EmojiIdentity,
    /// Non-empty, in configured order.
    pub role_ids: Vec<u64>,
}

/// Normalized configuration for one tracked message.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageConfig {
    pub channel_id: u64,
    pub message_id: u64,
    pub reactions: Vec<TrackedReactionConfig>,
}
