use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// `.env` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// The reaction config file could not be read from disk.
    #[error("Failed to read reaction config {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The reaction config file is not valid JSON or does not match the expected shape.
    #[error("Failed to parse reaction config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// An emoji key in a react map is empty or has a malformed custom emoji mention.
    #[error("Invalid emoji key {key:?} for message {message_id}")]
    InvalidEmoji { message_id: u64, key: String },

    /// Two keys in the same react map resolve to the same emoji.
    #[error("Emoji {key:?} is configured more than once for message {message_id}")]
    DuplicateEmoji { message_id: u64, key: String },

    /// A react map value is an empty role list.
    #[error("Emoji {key:?} on message {message_id} maps to no roles")]
    EmptyRoleList { message_id: u64, key: String },

    /// A configured message has no tracked reactions.
    #[error("Message {0} has an empty react map")]
    EmptyReactMap(u64),

    /// The same message is configured by more than one entry.
    ///
    /// Both entries would otherwise race to own the same index slot.
    #[error("Message {0} is configured more than once")]
    DuplicateMessage(u64),
}
