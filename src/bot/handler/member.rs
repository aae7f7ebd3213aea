use serenity::all::{ChannelId, Context, GuildId, Member, User};

use crate::{bot::handler::relay, model::event::AuditEvent};

/// Handles the guild_member_addition event when a member joins a guild
pub async fn handle_guild_member_addition(
    log_channel_id: Option<ChannelId>,
    ctx: Context,
    new_member: Member,
) {
    let event = AuditEvent::MemberJoined {
        member: new_member.user.tag(),
    };

    relay(&ctx, log_channel_id, new_member.guild_id, event).await;
}

/// Handles the guild_member_removal event when a member leaves a guild
pub async fn handle_guild_member_removal(
    log_channel_id: Option<ChannelId>,
    ctx: Context,
    guild_id: GuildId,
    user: User,
    _member_data_if_available: Option<Member>,
) {
    let event = AuditEvent::MemberLeft { member: user.tag() };

    relay(&ctx, log_channel_id, guild_id, event).await;
}

/// Handles the guild_ban_addition event.
///
/// The record names only the banned user; who issued the ban is not part of the
/// gateway event.
pub async fn handle_guild_ban_addition(
    log_channel_id: Option<ChannelId>,
    ctx: Context,
    guild_id: GuildId,
    banned_user: User,
) {
    let event = AuditEvent::MemberBanned {
        user: banned_user.tag(),
    };

    relay(&ctx, log_channel_id, guild_id, event).await;
}

/// Handles the guild_ban_removal event
pub async fn handle_guild_ban_removal(
    log_channel_id: Option<ChannelId>,
    ctx: Context,
    guild_id: GuildId,
    unbanned_user: User,
) {
    let event = AuditEvent::MemberUnbanned {
        user: unbanned_user.tag(),
    };

    relay(&ctx, log_channel_id, guild_id, event).await;
}
