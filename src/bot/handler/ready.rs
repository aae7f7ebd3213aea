//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake. It is the
//! first event received after authentication.

use serenity::all::{ActivityData, ChannelId, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// Logs the connection and the configured destination, and sets the bot's
/// activity so moderators can see it is watching the server.
///
/// # Arguments
/// - `log_channel_id` - Configured log channel, only used for the startup log line
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(log_channel_id: Option<ChannelId>, ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord ({} guilds)",
        ready.user.name,
        ready.guilds.len()
    );

    match log_channel_id {
        Some(channel_id) => tracing::info!("Relaying audit records to channel {}", channel_id),
        None => tracing::warn!("No log channel configured, audit records will be dropped"),
    }

    ctx.set_activity(Some(ActivityData::watching("the audit log")));
}
