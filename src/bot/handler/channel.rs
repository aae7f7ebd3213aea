//! Channel event handlers for Discord guild channels.
//!
//! Creation and deletion of any guild channel (text, voice, category, forum,
//! ...) is reported with the channel's name and type. Channel updates are not
//! audited.

use serenity::all::{ChannelId, Context, GuildChannel, Message};

use crate::{bot::handler::relay, model::event::AuditEvent};

/// Handles the channel_create event when a channel is created in a guild.
///
/// # Arguments
/// - `log_channel_id` - Configured log channel
/// - `ctx` - Discord context used for the destination lookup and send
/// - `channel` - The newly created guild channel from Discord
pub async fn handle_channel_create(
    log_channel_id: Option<ChannelId>,
    ctx: Context,
    channel: GuildChannel,
) {
    tracing::debug!(
        "Channel {} created in guild {}",
        channel.name,
        channel.guild_id
    );

    relay(
        &ctx,
        log_channel_id,
        channel.guild_id,
        AuditEvent::channel_created(&channel),
    )
    .await;
}

/// Handles the channel_delete event when a channel is deleted from a guild.
///
/// If the deleted channel is the log channel itself, the record has nowhere to
/// go and is dropped as an unresolved destination.
///
/// # Arguments
/// - `log_channel_id` - Configured log channel
/// - `ctx` - Discord context used for the destination lookup and send
/// - `channel` - The deleted guild channel
/// - `_messages` - Cached messages from the channel (unused)
pub async fn handle_channel_delete(
    log_channel_id: Option<ChannelId>,
    ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    if Some(channel.id) == log_channel_id {
        tracing::warn!(
            "The log channel {} was deleted from guild {}",
            channel.id,
            channel.guild_id
        );
    }

    relay(
        &ctx,
        log_channel_id,
        channel.guild_id,
        AuditEvent::channel_deleted(&channel),
    )
    .await;
}
