use serenity::all::{ChannelId, Context, GuildId, Reaction};

use crate::{
    bot::{handler::relay, tracker::MessageTracker},
    model::{
        actor::{Actor, UNKNOWN_USER},
        event::{emoji_name, AuditEvent},
    },
};

/// Handles the reaction_add event when a user reacts to a message
pub async fn handle_reaction_add(
    log_channel_id: Option<ChannelId>,
    tracker: &MessageTracker,
    ctx: Context,
    reaction: Reaction,
) {
    let Some((guild_id, reactor, message_author)) =
        resolve_reaction(tracker, &ctx, &reaction).await
    else {
        return;
    };

    let event = AuditEvent::ReactionAdded {
        reactor,
        emoji: emoji_name(&reaction.emoji),
        message_author,
    };

    relay(&ctx, log_channel_id, guild_id, event).await;
}

/// Handles the reaction_remove event when a user removes their reaction
pub async fn handle_reaction_remove(
    log_channel_id: Option<ChannelId>,
    tracker: &MessageTracker,
    ctx: Context,
    reaction: Reaction,
) {
    let Some((guild_id, reactor, message_author)) =
        resolve_reaction(tracker, &ctx, &reaction).await
    else {
        return;
    };

    let event = AuditEvent::ReactionRemoved {
        reactor,
        emoji: emoji_name(&reaction.emoji),
        message_author,
    };

    relay(&ctx, log_channel_id, guild_id, event).await;
}

/// Looks up the guild, the reacting user and the author of the reacted-to message.
///
/// Returns `None` for reactions outside a guild. Bot reactions return early
/// without fetching the message author; the normalizer drops them.
async fn resolve_reaction(
    tracker: &MessageTracker,
    ctx: &Context,
    reaction: &Reaction,
) -> Option<(GuildId, Actor, String)> {
    let guild_id = reaction.guild_id?;

    let reactor = match &reaction.member {
        Some(member) => Actor::from(member),
        None => match reaction.user(ctx).await {
            Ok(user) => Actor::from(&user),
            Err(e) => {
                tracing::warn!(
                    "Failed to resolve user for reaction on message {}: {}",
                    reaction.message_id,
                    e
                );
                Actor::unknown()
            }
        },
    };

    if reactor.bot {
        return Some((guild_id, reactor, UNKNOWN_USER.to_string()));
    }

    let message_author = match tracker.get(reaction.message_id).await {
        Some(snapshot) => snapshot.author.tag,
        None => match reaction.message(ctx).await {
            Ok(message) => message.author.tag(),
            Err(e) => {
                tracing::warn!(
                    "Failed to fetch message {} for reaction: {}",
                    reaction.message_id,
                    e
                );
                UNKNOWN_USER.to_string()
            }
        },
    };

    Some((guild_id, reactor, message_author))
}
