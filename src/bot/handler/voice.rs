//! Voice state handler.
//!
//! Discord reports every voice state change (joins, leaves, moves, mutes) as a
//! single update carrying the old and new state. Only joining from no channel
//! and leaving to no channel become audit records.

use serenity::all::{ChannelId, Context, GuildId, VoiceState};

use crate::{
    bot::handler::relay, model::actor::UNKNOWN_USER, service::normalizer::voice_transition,
};

/// Handles the voice_state_update event
pub async fn handle_voice_state_update(
    log_channel_id: Option<ChannelId>,
    ctx: Context,
    old: Option<VoiceState>,
    new: VoiceState,
) {
    let Some(guild_id) = new.guild_id else {
        return;
    };

    let previous = old
        .as_ref()
        .and_then(|state| state.channel_id)
        .map(|channel_id| channel_name(&ctx, guild_id, channel_id));
    let current = new
        .channel_id
        .map(|channel_id| channel_name(&ctx, guild_id, channel_id));

    let member = match &new.member {
        Some(member) => member.user.tag(),
        None => match new.user_id.to_user(&ctx).await {
            Ok(user) => user.tag(),
            Err(e) => {
                tracing::warn!("Failed to resolve voice user {}: {}", new.user_id, e);
                UNKNOWN_USER.to_string()
            }
        },
    };

    let Some(event) = voice_transition(&member, previous.as_deref(), current.as_deref()) else {
        return;
    };

    relay(&ctx, log_channel_id, guild_id, event).await;
}

/// Name of a guild channel from the cache, or its mention if it is not cached.
fn channel_name(ctx: &Context, guild_id: GuildId, channel_id: ChannelId) -> String {
    ctx.cache
        .guild(guild_id)
        .and_then(|guild| {
            guild
                .channels
                .get(&channel_id)
                .map(|channel| channel.name.clone())
        })
        .unwrap_or_else(|| format!("<#{}>", channel_id))
}
