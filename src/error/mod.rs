//! Error types for startup and the gateway connection.
//!
//! Only two things can stop the relay: a configuration problem detected while
//! reading the environment, or the Discord client failing to connect (most
//! commonly a rejected bot token). Everything that goes wrong while handling a
//! single gateway event is contained inside that event's handler and logged
//! locally, so it never shows up here.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Returned from `main` so that any fatal error terminates the process with a
/// non-zero exit status.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Discord API or gateway error from Serenity.
    ///
    /// Boxed due to large size. Raised when the client cannot be built or the
    /// gateway rejects the bot's authentication.
    #[error(transparent)]
    DiscordErr(#[from] Box<serenity::Error>),
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
