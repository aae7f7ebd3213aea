use super::*;
use crate::{
    model::record::{DeliveryOutcome, LogRecord},
    service::delivery::DeliveryGuard,
};

fn record() -> LogRecord {
    LogRecord::new(
        "2024-03-01 14:05:09".to_string(),
        "🚫 bob#9999 was banned".to_string(),
    )
}

#[tokio::test]
async fn delivers_to_resolved_channel() {
    let sink = RecordingSink::with_log_channel();
    let guard = DeliveryGuard::new(&sink, Some(ChannelId::new(LOG_CHANNEL_ID)));

    let outcome = guard.deliver(GuildId::new(GUILD_ID), &record()).await;

    assert_eq!(outcome, DeliveryOutcome::Delivered);
    assert_eq!(
        sink.sent(),
        vec![(
            ChannelId::new(LOG_CHANNEL_ID),
            "[2024-03-01 14:05:09] 🚫 bob#9999 was banned".to_string()
        )]
    );
}

/// Tests that the log channel is not used for events from a guild that does not contain it.
#[tokio::test]
async fn unresolved_in_other_guild() {
    let sink = RecordingSink::with_log_channel();
    let guard = DeliveryGuard::new(&sink, Some(ChannelId::new(LOG_CHANNEL_ID)));

    let outcome = guard
        .deliver(GuildId::new(OTHER_GUILD_ID), &record())
        .await;

    assert_eq!(outcome, DeliveryOutcome::DestinationUnresolved);
    assert!(sink.sent().is_empty());
}

#[tokio::test]
async fn unresolved_without_configured_destination() {
    let sink = RecordingSink::with_log_channel();
    let guard = DeliveryGuard::new(&sink, None);

    let outcome = guard.deliver(GuildId::new(GUILD_ID), &record()).await;

    assert_eq!(outcome, DeliveryOutcome::DestinationUnresolved);
    assert!(sink.sent().is_empty());
}

#[tokio::test]
async fn unresolved_for_unknown_channel() {
    let sink = RecordingSink::with_log_channel();
    let guard = DeliveryGuard::new(&sink, Some(ChannelId::new(444_444_444)));

    let outcome = guard.deliver(GuildId::new(GUILD_ID), &record()).await;

    assert_eq!(outcome, DeliveryOutcome::DestinationUnresolved);
}

/// Tests that a rejected send is attempted once and not surfaced to the caller.
#[tokio::test]
async fn failed_send_is_not_retried_or_reported() {
    let sink = RecordingSink::failing();
    let guard = DeliveryGuard::new(&sink, Some(ChannelId::new(LOG_CHANNEL_ID)));

    let outcome = guard.deliver(GuildId::new(GUILD_ID), &record()).await;

    assert_eq!(outcome, DeliveryOutcome::Delivered);
    assert_eq!(sink.sent().len(), 1);
}
