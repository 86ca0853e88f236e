use crate::{
    error::config::ConfigError,
    model::{config::RawMessageConfig, emoji::EmojiIdentity},
    service::config::ConfigResolver,
};

mod normalize;

/// Parses raw config records from JSON the way the config file loader does.
fn raw(json: serde_json::Value) -> Vec<RawMessageConfig> {
    serde_json::from_value(json).unwrap()
}
