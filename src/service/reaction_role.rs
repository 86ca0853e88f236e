use std::collections::HashMap;

use futures::future::join_all;

use crate::{
    data::platform::ReactionPlatform,
    error::{resolution::ResolutionError, AppError},
    model::{
        config::MessageConfig,
        discord::{DiscordChannel, GuildRole},
        emoji::{EmojiIdentity, ReactionEmoji},
        index::{SyncIndex, TrackedMessage},
        notification::{IgnoreReason, ReactionNotification, ReconcileOutcome},
    },
};

pub struct ReactionRoleService<'a, P: ReactionPlatform> {
    platform: &'a P,
}

impl<'a, P: ReactionPlatform> ReactionRoleService<'a, P> {
    pub fn new(platform: &'a P) -> Self {
        Self { platform }
    }

    /// Builds the synchronization index from normalized config
    ///
    /// Reconciles every configured message concurrently: resolves its channel and message,
    /// seeds any of the bot's tracked reactions that are missing, confirms each tracked
    /// reaction is present, and resolves the mapped roles. Safe to run repeatedly; a message
    /// that already carries all of the bot's reactions receives no new reaction requests.
    ///
    /// Every message is attempted even when another fails. If any message fails, all failures
    /// are logged and returned together and no index is produced.
    ///
    /// # Arguments
    /// - `configs`: Normalized message configs, at most one per message
    ///
    /// # Returns
    /// - `Ok(SyncIndex)`: Index containing every configured message
    /// - `Err(AppError::StartupErr)`: One or more messages failed to reconcile
    pub async fn build_index(&self, configs: &[MessageConfig]) -> Result<SyncIndex, AppError> {
        let results = join_all(configs.iter().map(|config| self.reconcile_message(config))).await;

        let mut index = SyncIndex::new();
        let mut failures = Vec::new();

        for (config, result) in configs.iter().zip(results) {
            match result {
                Ok(entry) => index.insert(entry),
                Err(e) => {
                    tracing::error!(
                        "Failed to reconcile message {} in channel {}: {}",
                        config.message_id,
                        config.channel_id,
                        e
                    );
                    failures.push(e);
                }
            }
        }

        if !failures.is_empty() {
            return Err(AppError::StartupErr(failures));
        }

        tracing::info!("Built reaction role index for {} messages", index.len());

        Ok(index)
    }

    /// Reconciles a single configured message into an index entry
    async fn reconcile_message(&self, config: &MessageConfig) -> Result<TrackedMessage, AppError> {
        let channel = self
            .platform
            .fetch_channel(config.channel_id)
            .await?
            .ok_or(ResolutionError::ChannelNotFound {
                channel_id: config.channel_id,
            })?;

        let message = self
            .platform
            .fetch_message(channel.channel_id, config.message_id)
            .await?
            .ok_or(ResolutionError::MessageNotFound {
                channel_id: channel.channel_id,
                message_id: config.message_id,
            })?;

        // Seed in configured order so the reacts show up on the message in that order
        let mut seeded = 0;
        for reaction in &config.reactions {
            if message.has_own_reaction(&reaction.emoji) {
                continue;
            }

            let emoji = self.resolve_emoji(&channel, &reaction.emoji).await?;
            self.platform
                .add_reaction(channel.channel_id, message.message_id, &emoji)
                .await?;
            seeded += 1;

            tracing::info!(
                "Added reaction {} to message {} in #{}",
                reaction.emoji,
                message.message_id,
                channel.name
            );
        }

        let present = if seeded > 0 {
            self.platform
                .list_reactions(channel.channel_id, message.message_id)
                .await?
        } else {
            message.reactions
        };

        let mut reactions = HashMap::with_capacity(config.reactions.len());
        for reaction in &config.reactions {
            if !present.iter().any(|r| r.emoji == reaction.emoji) {
                return Err(ResolutionError::ReactionNotFound {
                    message_id: message.message_id,
                    emoji: reaction.emoji.clone(),
                }
                .into());
            }

            let roles = self.resolve_roles(channel.guild_id, &reaction.role_ids).await?;
            reactions.insert(reaction.emoji.clone(), roles);
        }

        tracing::debug!(
            "Tracking {} reactions on message {} in #{} (seeded {})",
            reactions.len(),
            message.message_id,
            channel.name,
            seeded
        );

        Ok(TrackedMessage {
            guild_id: channel.guild_id,
            channel_id: channel.channel_id,
            message_id: message.message_id,
            reactions,
        })
    }

    /// Resolves the request data needed to react with an emoji
    async fn resolve_emoji(
        &self,
        channel: &DiscordChannel,
        emoji: &EmojiIdentity,
    ) -> Result<ReactionEmoji, AppError> {
        match emoji {
            EmojiIdentity::Unicode(name) => Ok(ReactionEmoji::unicode(name)),
            EmojiIdentity::Custom(emoji_id) => Ok(self
                .platform
                .fetch_emoji(channel.guild_id, *emoji_id)
                .await?
                .ok_or(ResolutionError::EmojiNotFound {
                    guild_id: channel.guild_id,
                    emoji_id: *emoji_id,
                })?),
        }
    }

    async fn resolve_roles(
        &self,
        guild_id: u64,
        role_ids: &[u64],
    ) -> Result<Vec<GuildRole>, AppError> {
        let mut roles = Vec::with_capacity(role_ids.len());

        for role_id in role_ids {
            let role = self
                .platform
                .fetch_role(guild_id, *role_id)
                .await?
                .ok_or(ResolutionError::RoleNotFound {
                    guild_id,
                    role_id: *role_id,
                })?;
            roles.push(role);
        }

        Ok(roles)
    }

    /// Reconciles a member's roles with a reaction add or remove
    ///
    /// Grants the roles mapped to the emoji on an add and revokes them on a remove, issuing a
    /// request only for roles whose current membership differs. Notifications for untracked
    /// messages or emoji, for the bot's own reactions, and for users no longer in the guild
    /// are ignored. Role requests run concurrently and a failed request does not affect the
    /// others; failures are logged, never returned.
    ///
    /// # Arguments
    /// - `index`: The synchronization index built at startup
    /// - `notification`: The reaction add or remove to handle
    ///
    /// # Returns
    /// - `ReconcileOutcome::Ignored`: Nothing to do, with the reason
    /// - `ReconcileOutcome::Reconciled`: Roles granted, revoked, and failed
    pub async fn handle_notification(
        &self,
        index: &SyncIndex,
        notification: &ReactionNotification,
    ) -> ReconcileOutcome {
        let Some(entry) = index.get(notification.message_id) else {
            return ReconcileOutcome::Ignored(IgnoreReason::UntrackedMessage);
        };

        let Some(roles) = entry.roles_for(&notification.emoji) else {
            return ReconcileOutcome::Ignored(IgnoreReason::UntrackedEmoji);
        };

        // The bot's own seeding reactions arrive as add notifications too
        if notification.user_id == self.platform.current_user_id() {
            return ReconcileOutcome::Ignored(IgnoreReason::OwnReaction);
        }

        let member = match self
            .platform
            .fetch_member(entry.guild_id, notification.user_id)
            .await
        {
            Ok(Some(member)) => member,
            Ok(None) => {
                tracing::debug!(
                    "User {} reacted on message {} but is not a member of guild {}",
                    notification.user_id,
                    entry.message_id,
                    entry.guild_id
                );
                return ReconcileOutcome::Ignored(IgnoreReason::MemberNotFound);
            }
            Err(e) => {
                tracing::error!(
                    "Failed to fetch member {} in guild {}: {}",
                    notification.user_id,
                    entry.guild_id,
                    e
                );
                return ReconcileOutcome::Ignored(IgnoreReason::MemberLookupFailed);
            }
        };

        let desired = notification.kind.desired_membership();
        let reason = format!("Reaction role on message {}", entry.message_id);
        let member = &member;

        let requests = roles
            .iter()
            .filter(|role| member.has_role(role.role_id) != desired)
            .map(|role| {
                let reason = reason.as_str();
                async move {
                    let result = if desired {
                        self.platform
                            .add_role_to_member(entry.guild_id, member.user_id, role.role_id, reason)
                            .await
                    } else {
                        self.platform
                            .remove_role_from_member(
                                entry.guild_id,
                                member.user_id,
                                role.role_id,
                                reason,
                            )
                            .await
                    };
                    (role, result)
                }
            });

        let mut granted = Vec::new();
        let mut revoked = Vec::new();
        let mut failed = Vec::new();

        for (role, result) in join_all(requests).await {
            match result {
                Ok(()) if desired => {
                    tracing::info!(
                        "Granted role {} to user {} in guild {}",
                        role.name,
                        member.user_id,
                        entry.guild_id
                    );
                    granted.push(role.role_id);
                }
                Ok(()) => {
                    tracing::info!(
                        "Revoked role {} from user {} in guild {}",
                        role.name,
                        member.user_id,
                        entry.guild_id
                    );
                    revoked.push(role.role_id);
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to {} role {} for user {} in guild {}: {}",
                        if desired { "grant" } else { "revoke" },
                        role.name,
                        member.user_id,
                        entry.guild_id,
                        e
                    );
                    failed.push(role.role_id);
                }
            }
        }

        ReconcileOutcome::Reconciled {
            granted,
            revoked,
            failed,
        }
    }
}
