use serenity::all::{Client, GatewayIntents};

use crate::{
    bot::{handler::Handler, tracker::MessageTracker},
    config::Config,
    error::AppError,
};

/// Gateway intents for every event the relay audits.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::GUILD_MODERATION
}

/// Starts the Discord bot in a blocking manner
///
/// Builds the client with the audit event handler and runs it until the
/// connection ends. Reconnects and heartbeats are handled by Serenity.
///
/// # Arguments
/// - `config` - Application configuration
///
/// # Returns
/// - `Ok(())` if the bot shuts down cleanly
/// - `Err(AppError)` if the client cannot be built or Discord rejects the token
pub async fn start_bot(config: &Config) -> Result<(), AppError> {
    let handler = Handler::new(
        config.log_channel_id,
        MessageTracker::new(config.message_cache_size),
    );

    let mut client = Client::builder(&config.bot_token, intents())
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    // Blocks until shutdown
    client.start().await?;

    Ok(())
}
