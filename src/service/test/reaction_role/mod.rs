use crate::{
    data::mock::{MockPlatform, PlatformCall, BOT_USER_ID},
    error::{resolution::ResolutionError, AppError},
    model::{
        config::{MessageConfig, TrackedReactionConfig},
        emoji::EmojiIdentity,
        index::SyncIndex,
        notification::{IgnoreReason, ReactionKind, ReactionNotification, ReconcileOutcome},
    },
    service::reaction_role::ReactionRoleService,
};


const GUILD_ID: u64 = 1000;
const CHANNEL_ID: u64 = 2000;
const MESSAGE_ID: u64 = 3000;
const ROLE_1: u64 = 4001;
const ROLE_2: u64 = 4002;
const ROLE_3: u64 = 4003;
const USER_ID: u64 = 5000;

fn check() -> EmojiIdentity {
    EmojiIdentity::Unicode("✅".to_string())
}

fn fire() -> EmojiIdentity {
    EmojiIdentity::Unicode("🔥".to_string())
}

/// Config for one message mapping "✅" to role 1 and "🔥" to roles 2 and 3.
fn example_config(channel_id: u64, message_id: u64) -> MessageConfig {
    MessageConfig {
        channel_id,
        message_id,
        reactions: vec![
            TrackedReactionConfig {
                emoji: check(),
                role_ids: vec![ROLE_1],
            },
            TrackedReactionConfig {
                emoji: fire(),
                role_ids: vec![ROLE_2, ROLE_3],
            },
        ],
    }
}

/// Platform with the example guild: one channel, one message, and the three example roles.
fn example_platform() -> MockPlatform {
    MockPlatform::new()
        .with_channel(GUILD_ID, CHANNEL_ID)
        .with_message(CHANNEL_ID, MESSAGE_ID)
        .with_role(GUILD_ID, ROLE_1)
        .with_role(GUILD_ID, ROLE_2)
        .with_role(GUILD_ID, ROLE_3)
}

fn notification(kind: ReactionKind, user_id: u64, emoji: EmojiIdentity) -> ReactionNotification {
    ReactionNotification {
        kind,
        user_id,
        guild_id: GUILD_ID,
        channel_id: CHANNEL_ID,
        message_id: MESSAGE_ID,
        emoji,
    }
}

/// Builds the example index against the given platform and clears the recorded startup calls.
async fn example_index(platform: &MockPlatform) -> SyncIndex {
    let index = ReactionRoleService::new(platform)
        .build_index(&[example_config(CHANNEL_ID, MESSAGE_ID)])
        .await
        .unwrap();
    platform.clear_calls();
    index
}
