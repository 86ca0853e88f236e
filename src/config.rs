use std::path::PathBuf;

use crate::error::{config::ConfigError, AppError};

const DEFAULT_REACTION_CONFIG_PATH: &str = "./config.json";

pub struct Config {
    pub discord_bot_token: String,

    /// Path to the JSON file listing tracked messages and their react maps.
    pub reaction_config_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            discord_bot_token: std::env::var("DISCORD_BOT_TOKEN")
                .map_err(|_| ConfigError::MissingEnvVar("DISCORD_BOT_TOKEN".to_string()))?,
            reaction_config_path: std::env::var("REACTION_CONFIG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_REACTION_CONFIG_PATH)),
        })
    }
}
