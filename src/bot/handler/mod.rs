use serenity::all::{
    ChannelId, Context, EventHandler, GuildChannel, GuildId, Member, Message, MessageId,
    MessageUpdateEvent, Reaction, Ready, User, VoiceState,
};
use serenity::async_trait;

use crate::{
    bot::tracker::MessageTracker,
    model::event::AuditEvent,
    service::{delivery::SerenitySink, dispatcher::AuditDispatcher},
};

pub mod channel;
pub mod member;
pub mod message;
pub mod reaction;
pub mod ready;
pub mod voice;

/// Discord bot event handler
pub struct Handler {
    pub log_channel_id: Option<ChannelId>,
    pub tracker: MessageTracker,
}

impl Handler {
    pub fn new(log_channel_id: Option<ChannelId>, tracker: MessageTracker) -> Self {
        Self {
            log_channel_id,
            tracker,
        }
    }
}

/// Sends an event through the audit pipeline using the context's cache and HTTP client.
pub async fn relay(
    ctx: &Context,
    log_channel_id: Option<ChannelId>,
    guild_id: GuildId,
    event: AuditEvent,
) {
    AuditDispatcher::new(SerenitySink::from_context(ctx), log_channel_id)
        .dispatch(guild_id, &event)
        .await;
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(self.log_channel_id, ctx, ready).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, new_message: Message) {
        message::handle_message(self.log_channel_id, &self.tracker, ctx, new_message).await;
    }

    /// Called when a message is edited
    async fn message_update(
        &self,
        ctx: Context,
        old_if_available: Option<Message>,
        new: Option<Message>,
        event: MessageUpdateEvent,
    ) {
        message::handle_message_update(
            self.log_channel_id,
            &self.tracker,
            ctx,
            old_if_available,
            new,
            event,
        )
        .await;
    }

    /// Called when a message is deleted
    async fn message_delete(
        &self,
        ctx: Context,
        channel_id: ChannelId,
        deleted_message_id: MessageId,
        guild_id: Option<GuildId>,
    ) {
        message::handle_message_delete(
            self.log_channel_id,
            &self.tracker,
            ctx,
            channel_id,
            deleted_message_id,
            guild_id,
        )
        .await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        reaction::handle_reaction_add(self.log_channel_id, &self.tracker, ctx, add_reaction)
            .await;
    }

    /// Called when a reaction is removed from a message
    async fn reaction_remove(&self, ctx: Context, removed_reaction: Reaction) {
        reaction::handle_reaction_remove(
            self.log_channel_id,
            &self.tracker,
            ctx,
            removed_reaction,
        )
        .await;
    }

    /// Called when a member joins, leaves or changes state in a voice channel
    async fn voice_state_update(&self, ctx: Context, old: Option<VoiceState>, new: VoiceState) {
        voice::handle_voice_state_update(self.log_channel_id, ctx, old, new).await;
    }

    /// Called when a channel is created in a guild
    async fn channel_create(&self, ctx: Context, channel: GuildChannel) {
        channel::handle_channel_create(self.log_channel_id, ctx, channel).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(self.log_channel_id, ctx, channel, messages).await;
    }

    /// Called when a member joins a guild
    async fn guild_member_addition(&self, ctx: Context, new_member: Member) {
        member::handle_guild_member_addition(self.log_channel_id, ctx, new_member).await;
    }

    /// Called when a member leaves a guild
    async fn guild_member_removal(
        &self,
        ctx: Context,
        guild_id: GuildId,
        user: User,
        member_data_if_available: Option<Member>,
    ) {
        member::handle_guild_member_removal(
            self.log_channel_id,
            ctx,
            guild_id,
            user,
            member_data_if_available,
        )
        .await;
    }

    /// Called when a user is banned from a guild
    async fn guild_ban_addition(&self, ctx: Context, guild_id: GuildId, banned_user: User) {
        member::handle_guild_ban_addition(self.log_channel_id, ctx, guild_id, banned_user).await;
    }

    /// Called when a user is unbanned from a guild
    async fn guild_ban_removal(&self, ctx: Context, guild_id: GuildId, unbanned_user: User) {
        member::handle_guild_ban_removal(self.log_channel_id, ctx, guild_id, unbanned_user)
            .await;
    }
}
