use serenity::all::{Context, EventHandler, Reaction, Ready};
use serenity::async_trait;
use tokio::sync::OnceCell;

use crate::model::{config::MessageConfig, index::SyncIndex, notification::ReactionKind};

pub mod reaction;
pub mod ready;

/// State available once startup reconciliation has succeeded.
pub struct SyncState {
    pub index: SyncIndex,
    pub bot_user_id: u64,
}

/// Discord bot event handler
pub struct Handler {
    pub configs: Vec<MessageConfig>,
    /// Set exactly once, after the index has been built. Reactions are ignored until then.
    pub state: OnceCell<SyncState>,
}

impl Handler {
    pub fn new(configs: Vec<MessageConfig>) -> Self {
        Self {
            configs,
            state: OnceCell::new(),
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(&self.configs, &self.state, ctx, ready).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction(&self.state, ctx, ReactionKind::Add, add_reaction).await;
    }

    /// Called when a reaction is removed from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction(&self.state, ctx, ReactionKind::Remove, removed_reaction).await;
    }
}
