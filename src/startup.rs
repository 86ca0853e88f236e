use std::path::Path;

use tracing_subscriber::filter::EnvFilter;

use crate::{
    error::{config::ConfigError, AppError},
    model::config::{MessageConfig, RawMessageConfig},
    service::config::ConfigResolver,
};

/// Initializes the tracing subscriber.
///
/// Log level is taken from `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();
}

/// Loads and normalizes the reaction config file.
///
/// Reads the JSON file of tracked messages, deserializes it, and normalizes it with
/// `ConfigResolver`. Runs before the bot connects so a bad config never reaches Discord.
///
/// # Arguments
/// - `path` - Path to the reaction config JSON file
///
/// # Returns
/// - `Ok(Vec<MessageConfig>)` - Normalized message configs in file order
/// - `Err(AppError::ConfigErr)` - File unreadable, invalid JSON, or malformed entries
pub fn load_reaction_config(path: &Path) -> Result<Vec<MessageConfig>, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    let raw: Vec<RawMessageConfig> =
        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(ConfigResolver::normalize(raw)?)
}
