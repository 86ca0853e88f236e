//! Reaction event handlers.
//!
//! Serenity's `reaction_add` and `reaction_remove` callbacks both land here, tagged with
//! their `ReactionKind`. Each event is converted into a `ReactionNotification` and handed to
//! `ReactionRoleService`. Nothing here returns an error to the gateway loop; the outcome is
//! only logged.

use serenity::all::{Context, Reaction};
use tokio::sync::OnceCell;

use crate::{
    bot::handler::SyncState,
    data::discord::SerenityPlatform,
    model::notification::{ReactionKind, ReactionNotification, ReconcileOutcome},
    service::reaction_role::ReactionRoleService,
};

/// Handles a reaction add or remove.
///
/// Drops the event if the index is not built yet or the reaction is not on a guild message.
///
/// # Arguments
/// - `state` - Handler state holding the index once startup has succeeded
/// - `ctx` - Discord context providing the HTTP client
/// - `kind` - Whether the reaction was added or removed
/// - `reaction` - The reaction event from Discord
pub async fn handle_reaction(
    state: &OnceCell<SyncState>,
    ctx: Context,
    kind: ReactionKind,
    reaction: Reaction,
) {
    let Some(state) = state.get() else {
        tracing::debug!(
            "Ignoring reaction on message {} before the index is ready",
            reaction.message_id
        );
        return;
    };

    let Some(notification) = ReactionNotification::from_reaction(kind, &reaction) else {
        return;
    };

    let platform = SerenityPlatform::new(ctx.http.clone(), state.bot_user_id);
    let service = ReactionRoleService::new(&platform);

    match service.handle_notification(&state.index, &notification).await {
        ReconcileOutcome::Ignored(reason) => tracing::debug!(
            "Ignored {:?} reaction {} on message {}: {:?}",
            kind,
            notification.emoji,
            notification.message_id,
            reason
        ),
        ReconcileOutcome::Reconciled {
            granted,
            revoked,
            failed,
        } => tracing::debug!(
            "Reconciled {:?} reaction {} by user {} on message {}: {} granted, {} revoked, {} failed",
            kind,
            notification.emoji,
            notification.user_id,
            notification.message_id,
            granted.len(),
            revoked.len(),
            failed.len()
        ),
    }
}
