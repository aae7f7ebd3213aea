//! Destination lookup and best-effort delivery of audit records.
//!
//! The relay posts every record to a single configured channel. Before each
//! send the channel is looked up in the guild the event came from, so a record
//! from a guild that does not contain the log channel is dropped rather than
//! leaked into another server.

use std::sync::Arc;

use serenity::{
    all::{ChannelId, CreateAllowedMentions, CreateMessage, GuildId},
    async_trait,
    cache::Cache,
    client::Context,
    http::Http,
};

use crate::{
    error::AppError,
    model::record::{DeliveryOutcome, LogRecord},
};

/// Channel lookup and send capability the guard delivers through.
#[async_trait]
pub trait LogSink: Send + Sync {
    /// Returns whether `channel_id` is a live channel of `guild_id`.
    fn lookup(&self, guild_id: GuildId, channel_id: ChannelId) -> bool;

    /// Posts `content` to the channel as a single text message.
    async fn send(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError>;
}

/// Sink backed by Serenity's cache for lookups and its HTTP client for sends.
pub struct SerenitySink {
    cache: Arc<Cache>,
    http: Arc<Http>,
}

impl SerenitySink {
    pub fn new(cache: Arc<Cache>, http: Arc<Http>) -> Self {
        Self { cache, http }
    }

    pub fn from_context(ctx: &Context) -> Self {
        Self::new(ctx.cache.clone(), ctx.http.clone())
    }
}

#[async_trait]
impl LogSink for SerenitySink {
    fn lookup(&self, guild_id: GuildId, channel_id: ChannelId) -> bool {
        self.cache
            .guild(guild_id)
            .is_some_and(|guild| guild.channels.contains_key(&channel_id))
    }

    async fn send(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        // Logged message content must never ping the users it mentions.
        let message = CreateMessage::new()
            .content(content)
            .allowed_mentions(CreateAllowedMentions::new());

        channel_id.send_message(&self.http, message).await?;

        Ok(())
    }
}

/// Resolves the configured log channel and issues one send per record.
pub struct DeliveryGuard<'a, S: LogSink> {
    pub sink: &'a S,
    pub destination: Option<ChannelId>,
}

impl<'a, S: LogSink> DeliveryGuard<'a, S> {
    /// Creates a new DeliveryGuard instance.
    ///
    /// # Arguments
    /// - `sink` - Lookup and send capability
    /// - `destination` - Configured log channel, `None` if it was never set
    pub fn new(sink: &'a S, destination: Option<ChannelId>) -> Self {
        Self { sink, destination }
    }

    /// Delivers a record to the log channel of `guild_id`.
    ///
    /// There is no retry and no acknowledgement: a failed send is logged here
    /// and still reported as [`DeliveryOutcome::Delivered`], so one bad send
    /// never affects later events.
    ///
    /// # Returns
    /// - `DeliveryOutcome::Delivered` - The channel resolved and a send was issued
    /// - `DeliveryOutcome::DestinationUnresolved` - No destination is configured, or
    ///   it is not a channel of this guild
    pub async fn deliver(&self, guild_id: GuildId, record: &LogRecord) -> DeliveryOutcome {
        let Some(channel_id) = self
            .destination
            .filter(|channel_id| self.sink.lookup(guild_id, *channel_id))
        else {
            return DeliveryOutcome::DestinationUnresolved;
        };

        if let Err(e) = self.sink.send(channel_id, &record.text()).await {
            tracing::warn!(
                "Failed to send audit record to channel {} in guild {}: {}",
                channel_id,
                guild_id,
                e
            );
        }

        DeliveryOutcome::Delivered
    }
}
