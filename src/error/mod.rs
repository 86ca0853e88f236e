//! Error types for the reaction-role bot.
//!
//! `AppError` is the top-level error type. It wraps configuration errors raised before the
//! gateway connection is attempted, resolution errors raised while building the reaction index,
//! and Discord API errors from Serenity. Runtime reaction handling never returns these errors to
//! the gateway loop; failures there are logged and isolated per role mutation.

pub mod config;
pub mod resolution;

use thiserror::Error;

use crate::error::{config::ConfigError, resolution::ResolutionError};

/// Top-level application error type.
///
/// Most variants use `#[from]` for automatic conversion so that `?` can be used throughout
/// the startup path.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during environment loading or reaction config normalization.
    ///
    /// Always fatal, surfaced before connecting to Discord.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// A configured channel, message, emoji, reaction, or role could not be resolved.
    ///
    /// Fatal to the startup reconciliation; the bot does not handle reactions until the
    /// index has been built successfully.
    #[error(transparent)]
    ResolutionErr(#[from] ResolutionError),

    /// Discord API error from Serenity.
    ///
    /// Boxed due to large size.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),

    /// One or more configured messages failed startup reconciliation.
    ///
    /// Collects every failed entry so the operator sees all of them at once rather than
    /// fixing the configuration one message at a time.
    ///
    /// # Fields
    /// - Errors for each configured message that failed
    #[error("Startup reconciliation failed for {} message(s): {}", .0.len(), join_errors(.0))]
    StartupErr(Vec<AppError>),
}

/// Manual conversion from serenity::Error to AppError.
///
/// Boxes the error to reduce the size of the AppError enum, as serenity::Error
/// is very large and would make all AppError variants larger if not boxed.
impl From<serenity::Error> for AppError {
    fn from(err: serenity::Error) -> Self {
        AppError::DiscordErr(Box::new(err))
    }
}

fn join_errors(errors: &[AppError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
