use chrono::{DateTime, Utc};
use serenity::all::{ChannelId, GuildId};

use crate::{
    model::{
        event::{AuditEvent, AuditEventKind},
        record::{DeliveryOutcome, LogRecord, MESSAGE_CHAR_LIMIT},
    },
    service::{
        delivery::{DeliveryGuard, LogSink},
        normalizer, timestamp,
    },
};

/// Turns guild events into timestamped audit records and delivers them.
///
/// Holds no per-event state. The destination is fixed at construction and
/// only read afterwards.
pub struct AuditDispatcher<S: LogSink> {
    sink: S,
    destination: Option<ChannelId>,
}

impl<S: LogSink> AuditDispatcher<S> {
    pub fn new(sink: S, destination: Option<ChannelId>) -> Self {
        Self { sink, destination }
    }

    #[cfg(test)]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Normalizes, timestamps and delivers an event using the current time.
    pub async fn dispatch(
        &self,
        guild_id: GuildId,
        event: &AuditEvent,
    ) -> Option<DeliveryOutcome> {
        self.dispatch_at(guild_id, event, Utc::now()).await
    }

    /// Same as [`dispatch`](Self::dispatch) with an explicit clock reading.
    ///
    /// # Returns
    /// - `None` - The event is suppressed and nothing was sent
    /// - `Some(outcome)` - A record was built; `outcome` says whether it went out
    pub async fn dispatch_at(
        &self,
        guild_id: GuildId,
        event: &AuditEvent,
        now: DateTime<Utc>,
    ) -> Option<DeliveryOutcome> {
        let record = build_record(event, now)?;

        let outcome = DeliveryGuard::new(&self.sink, self.destination)
            .deliver(guild_id, &record)
            .await;

        if let Some(diagnostic) = unresolved_diagnostic(guild_id, event.kind(), outcome) {
            tracing::warn!("{}", diagnostic);
        }

        Some(outcome)
    }
}

/// Local diagnostic for a record that could not be delivered.
///
/// `None` when the record went out, and for voice events, which drop an
/// unresolved destination silently.
pub fn unresolved_diagnostic(
    guild_id: GuildId,
    kind: AuditEventKind,
    outcome: DeliveryOutcome,
) -> Option<String> {
    if outcome != DeliveryOutcome::DestinationUnresolved
        || !kind.reports_unresolved_destination()
    {
        return None;
    }

    Some(format!(
        "Could not find the log channel in guild {}, dropping {:?} record",
        guild_id, kind
    ))
}

/// Builds the record for an event at the given instant, or `None` when the
/// event is suppressed.
///
/// The body is clipped so the whole line fits in one Discord message.
pub fn build_record(event: &AuditEvent, now: DateTime<Utc>) -> Option<LogRecord> {
    let body = normalizer::render(event)?;
    let timestamp = timestamp::format_timestamp(now);

    // "[" + timestamp + "] "
    let budget = MESSAGE_CHAR_LIMIT.saturating_sub(timestamp.chars().count() + 3);
    let body = normalizer::clip(&body, budget);

    Some(LogRecord::new(timestamp, body))
}
