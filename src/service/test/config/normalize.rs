use super::*;

/// Tests that a single role and a one-element role list normalize identically.
///
/// Verifies the shorthand expansion: `"R1"` and `["R1"]` produce the same entry.
///
/// Expected: Ok with equal normalized configs
#[test]
fn single_role_matches_singleton_list() -> Result<(), ConfigError> {
    let single = ConfigResolver::normalize(raw(serde_json::json!([
        { "channel": "100", "message": "200", "reactMap": { "✅": "300" } }
    ])))?;
    let list = ConfigResolver::normalize(raw(serde_json::json!([
        { "channel": "100", "message": "200", "reactMap": { "✅": ["300"] } }
    ])))?;

    assert_eq!(single, list);
    assert_eq!(single[0].reactions[0].role_ids, vec![300]);

    Ok(())
}

/// Tests normalizing the documented example config.
///
/// Verifies emoji keys are parsed, list values pass through in order, and react map order
/// is preserved.
///
/// Expected: Ok with "✅" -> [1] followed by "🔥" -> [2, 3]
#[test]
fn normalizes_mixed_react_map() -> Result<(), ConfigError> {
    let configs = ConfigResolver::normalize(raw(serde_json::json!([
        {
            "channel": "10",
            "message": "20",
            "reactMap": { "✅": "1", "🔥": ["2", "3"] }
        }
    ])))?;

    assert_eq!(configs.len(), 1);
    let config = &configs[0];
    assert_eq!(config.channel_id, 10);
    assert_eq!(config.message_id, 20);
    assert_eq!(config.reactions.len(), 2);
    assert_eq!(
        config.reactions[0].emoji,
        EmojiIdentity::Unicode("✅".to_string())
    );
    assert_eq!(config.reactions[0].role_ids, vec![1]);
    assert_eq!(
        config.reactions[1].emoji,
        EmojiIdentity::Unicode("🔥".to_string())
    );
    assert_eq!(config.reactions[1].role_ids, vec![2, 3]);

    Ok(())
}

/// Tests that numeric IDs are accepted as JSON numbers as well as strings.
///
/// Expected: Ok with the same IDs either way
#[test]
fn accepts_numeric_ids() -> Result<(), ConfigError> {
    let configs = ConfigResolver::normalize(raw(serde_json::json!([
        { "channel": 10, "message": 20, "reactMap": { "555": [1, 2] } }
    ])))?;

    assert_eq!(configs[0].channel_id, 10);
    assert_eq!(configs[0].message_id, 20);
    assert_eq!(configs[0].reactions[0].emoji, EmojiIdentity::Custom(555));
    assert_eq!(configs[0].reactions[0].role_ids, vec![1, 2]);

    Ok(())
}

/// Tests that record order is preserved across multiple messages.
///
/// Expected: Ok with configs in input order
#[test]
fn preserves_record_order() -> Result<(), ConfigError> {
    let configs = ConfigResolver::normalize(raw(serde_json::json!([
        { "channel": "1", "message": "30", "reactMap": { "✅": "1" } },
        { "channel": "1", "message": "10", "reactMap": { "✅": "1" } },
        { "channel": "2", "message": "20", "reactMap": { "✅": "1" } }
    ])))?;

    let message_ids: Vec<u64> = configs.iter().map(|c| c.message_id).collect();
    assert_eq!(message_ids, vec![30, 10, 20]);

    Ok(())
}

/// Tests rejecting a message configured by two entries.
///
/// Expected: Err(ConfigError::DuplicateMessage)
#[test]
fn rejects_duplicate_message() {
    let result = ConfigResolver::normalize(raw(serde_json::json!([
        { "channel": "1", "message": "20", "reactMap": { "✅": "1" } },
        { "channel": "2", "message": "20", "reactMap": { "🔥": "2" } }
    ])));

    assert!(matches!(result, Err(ConfigError::DuplicateMessage(20))));
}

/// Tests rejecting an emoji mapped to an empty role list.
///
/// Expected: Err(ConfigError::EmptyRoleList)
#[test]
fn rejects_empty_role_list() {
    let result = ConfigResolver::normalize(raw(serde_json::json!([
        { "channel": "1", "message": "20", "reactMap": { "✅": [] } }
    ])));

    assert!(matches!(
        result,
        Err(ConfigError::EmptyRoleList { message_id: 20, .. })
    ));
}

/// Tests rejecting a message with no tracked emoji.
///
/// Expected: Err(ConfigError::EmptyReactMap)
#[test]
fn rejects_empty_react_map() {
    let result = ConfigResolver::normalize(raw(serde_json::json!([
        { "channel": "1", "message": "20", "reactMap": {} }
    ])));

    assert!(matches!(result, Err(ConfigError::EmptyReactMap(20))));
}

/// Tests rejecting two keys for the same custom emoji.
///
/// Verifies that a bare ID and a mention for the same emoji collide.
///
/// Expected: Err(ConfigError::DuplicateEmoji)
#[test]
fn rejects_duplicate_emoji() {
    let result = ConfigResolver::normalize(raw(serde_json::json!([
        {
            "channel": "1",
            "message": "20",
            "reactMap": { "42": "1", "<:party:42>": "2" }
        }
    ])));

    assert!(matches!(
        result,
        Err(ConfigError::DuplicateEmoji { message_id: 20, .. })
    ));
}

/// Tests rejecting a malformed custom emoji mention.
///
/// Expected: Err(ConfigError::InvalidEmoji)
#[test]
fn rejects_malformed_emoji_key() {
    let result = ConfigResolver::normalize(raw(serde_json::json!([
        { "channel": "1", "message": "20", "reactMap": { "<:party:>": "1" } }
    ])));

    assert!(matches!(
        result,
        Err(ConfigError::InvalidEmoji { message_id: 20, .. })
    ));
}

/// Tests rejecting custom emoji keys with a zero ID.
///
/// Discord IDs are never zero, so such a key can only be a typo and must fail before any
/// request is made.
///
/// Expected: Err(ConfigError::InvalidEmoji) for both the bare and the mention form
#[test]
fn rejects_zero_emoji_id() {
    for key in ["0", "<:party:0>"] {
        let result = ConfigResolver::normalize(raw(serde_json::json!([
            { "channel": "1", "message": "20", "reactMap": { (key): "3" } }
        ])));

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEmoji { message_id: 20, .. })
        ));
    }
}
