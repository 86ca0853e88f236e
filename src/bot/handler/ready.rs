//! Ready event handler for bot initialization.
//!
//! The ready event fires after the bot authenticates with the gateway, and again whenever the
//! session has to be re-identified. The first successful ready builds the synchronization
//! index; later ones find it already built and do nothing. If building fails, the index stays
//! unset and reactions keep being ignored, and the next ready tries again. Retrying is safe
//! because seeding reactions is idempotent.

use serenity::all::{Context, Ready};
use tokio::sync::OnceCell;

use crate::{
    bot::handler::SyncState,
    data::discord::SerenityPlatform,
    error::AppError,
    model::config::MessageConfig,
    service::reaction_role::ReactionRoleService,
};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `configs` - Normalized reaction config to build the index from
/// - `state` - Handler state, set once the index is built
/// - `ctx` - Discord context providing the HTTP client
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(
    configs: &[MessageConfig],
    state: &OnceCell<SyncState>,
    ctx: Context,
    ready: Ready,
) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    if state.initialized() {
        tracing::debug!("Reaction role index already built, skipping startup reconciliation");
        return;
    }

    let bot_user_id = ready.user.id.get();
    let platform = SerenityPlatform::new(ctx.http.clone(), bot_user_id);
    let service = ReactionRoleService::new(&platform);

    tracing::info!("Validating {} tracked messages", configs.len());

    let result = state
        .get_or_try_init(|| async {
            let index = service.build_index(configs).await?;
            Ok::<_, AppError>(SyncState { index, bot_user_id })
        })
        .await;

    match result {
        Ok(state) => tracing::info!(
            "Ready, tracking reactions on {} messages",
            state.index.len()
        ),
        Err(e) => tracing::error!(
            "Failed to build reaction role index, reactions will be ignored: {}",
            e
        ),
    }
}
