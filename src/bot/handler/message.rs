//! Message event handlers.
//!
//! Guild messages are snapshotted in the [`MessageTracker`] when they are
//! created so that later edits and deletions can be reported with the author
//! and the original content. The relay's own posts and anything in the log
//! channel are not tracked, so they never evict snapshots of user messages.
//! Direct messages are ignored: they have no guild in which to resolve the log
//! channel.

use serenity::all::{ChannelId, Context, GuildId, Message, MessageId, MessageUpdateEvent, UserId};

use crate::{
    bot::{
        handler::relay,
        tracker::{MessageTracker, TrackedMessage},
    },
    model::{actor::Actor, event::AuditEvent},
};

/// Handle message creation in a channel
pub async fn handle_message(
    log_channel_id: Option<ChannelId>,
    tracker: &MessageTracker,
    ctx: Context,
    message: Message,
) {
    let Some(guild_id) = message.guild_id else {
        return;
    };

    let relay_user_id = ctx.cache.current_user().id;
    track_message(tracker, &message, relay_user_id, log_channel_id).await;

    let event = AuditEvent::MessageCreated {
        author: Actor::from(&message.author),
        content: message.content,
    };

    relay(&ctx, log_channel_id, guild_id, event).await;
}

/// Snapshots a message unless it was posted by the relay or in the log channel.
pub async fn track_message(
    tracker: &MessageTracker,
    message: &Message,
    relay_user_id: UserId,
    log_channel_id: Option<ChannelId>,
) {
    if message.author.id == relay_user_id || Some(message.channel_id) == log_channel_id {
        return;
    }

    tracker.record(message).await;
}

/// Handle a message edit.
///
/// Updates without new content (embed unfurls, pins) are ignored. The previous
/// content comes from the tracker only.
pub async fn handle_message_update(
    log_channel_id: Option<ChannelId>,
    tracker: &MessageTracker,
    ctx: Context,
    _old_if_available: Option<Message>,
    new: Option<Message>,
    event: MessageUpdateEvent,
) {
    let Some(guild_id) = event.guild_id else {
        return;
    };

    let Some(after) = event
        .content
        .clone()
        .or_else(|| new.as_ref().map(|message| message.content.clone()))
    else {
        return;
    };

    let previous = tracker.update_content(event.id, &after).await;
    let author = event
        .author
        .as_ref()
        .map(Actor::from)
        .or_else(|| new.as_ref().map(|message| Actor::from(&message.author)));

    let event = edited_event(previous, author, after);

    relay(&ctx, log_channel_id, guild_id, event).await;
}

/// Handle a message deletion.
///
/// Serenity runs every gateway event in its own task, so a deletion that
/// arrives right after the creation can be handled before the snapshot is
/// stored. That deletion is logged with an unknown author and empty content.
pub async fn handle_message_delete(
    log_channel_id: Option<ChannelId>,
    tracker: &MessageTracker,
    ctx: Context,
    _channel_id: ChannelId,
    deleted_message_id: MessageId,
    guild_id: Option<GuildId>,
) {
    let Some(guild_id) = guild_id else {
        return;
    };

    let event = deleted_event(tracker.take(deleted_message_id).await);

    relay(&ctx, log_channel_id, guild_id, event).await;
}

/// Builds an edit event from whatever is known about the message.
///
/// The author from the update payload wins over the tracked snapshot's.
pub fn edited_event(
    tracked: Option<TrackedMessage>,
    author: Option<Actor>,
    after: String,
) -> AuditEvent {
    let before = tracked.as_ref().map(|snapshot| snapshot.content.clone());

    let author = author
        .or_else(|| tracked.map(|snapshot| snapshot.author))
        .unwrap_or_else(Actor::unknown);

    AuditEvent::MessageEdited {
        author,
        before,
        after,
    }
}

/// Builds a deletion event, falling back to an unknown author and no content
/// when the message was never tracked.
pub fn deleted_event(tracked: Option<TrackedMessage>) -> AuditEvent {
    match tracked {
        Some(snapshot) => AuditEvent::MessageDeleted {
            author: snapshot.author,
            content: Some(snapshot.content),
        },
        None => AuditEvent::MessageDeleted {
            author: Actor::unknown(),
            content: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::serenity::{create_test_message, create_test_user};

    const GUILD_ID: u64 = 111_111_111;
    const CHAT_CHANNEL_ID: u64 = 444_444_444;
    const LOG_CHANNEL_ID: u64 = 333_333_333;
    const RELAY_USER_ID: u64 = 555_555_555;

    fn snapshot(tag: &str, content: &str) -> TrackedMessage {
        TrackedMessage {
            author: Actor::new(tag, false),
            content: content.to_string(),
        }
    }

    #[test]
    fn test_deleted_event_from_snapshot() {
        let event = deleted_event(Some(snapshot("alice#0001", "hello")));

        assert_eq!(
            event,
            AuditEvent::MessageDeleted {
                author: Actor::new("alice#0001", false),
                content: Some("hello".to_string()),
            }
        );
    }

    #[test]
    fn test_deleted_event_without_snapshot() {
        let event = deleted_event(None);

        assert_eq!(
            event,
            AuditEvent::MessageDeleted {
                author: Actor::unknown(),
                content: None,
            }
        );
    }

    #[test]
    fn test_edited_event_uses_snapshot_content() {
        let event = edited_event(Some(snapshot("alice#0001", "teh")), None, "the".to_string());

        assert_eq!(
            event,
            AuditEvent::MessageEdited {
                author: Actor::new("alice#0001", false),
                before: Some("teh".to_string()),
                after: "the".to_string(),
            }
        );
    }

    #[test]
    fn test_edited_event_prefers_payload_author() {
        let event = edited_event(
            Some(snapshot("old-name", "teh")),
            Some(Actor::new("new-name", false)),
            "the".to_string(),
        );

        let AuditEvent::MessageEdited { author, .. } = event else {
            panic!("expected an edit event");
        };
        assert_eq!(author.tag, "new-name");
    }

    #[test]
    fn test_edited_event_with_nothing_known() {
        let event = edited_event(None, None, "the".to_string());

        assert_eq!(
            event,
            AuditEvent::MessageEdited {
                author: Actor::unknown(),
                before: None,
                after: "the".to_string(),
            }
        );
    }

    /// Tests that the relay's own posts do not evict snapshots of user messages.
    #[tokio::test]
    async fn test_relay_posts_are_not_tracked() {
        let tracker = MessageTracker::new(2);
        let relay_user_id = UserId::new(RELAY_USER_ID);
        let log_channel_id = Some(ChannelId::new(LOG_CHANNEL_ID));
        let alice = create_test_user(1, "alice", Some(1), false);
        let relay = create_test_user(RELAY_USER_ID, "relay", Some(42), true);

        let secret = create_test_message(10, CHAT_CHANNEL_ID, GUILD_ID, &alice, "secret");
        track_message(&tracker, &secret, relay_user_id, log_channel_id).await;

        for id in [11, 12] {
            let post = create_test_message(
                id,
                LOG_CHANNEL_ID,
                GUILD_ID,
                &relay,
                "[2024-03-01 14:05:09] [MSG] alice#0001: secret",
            );
            track_message(&tracker, &post, relay_user_id, log_channel_id).await;
        }

        assert_eq!(
            tracker.get(MessageId::new(10)).await,
            Some(snapshot("alice#0001", "secret"))
        );
        assert_eq!(tracker.tracked_count().await, 1);
    }

    #[tokio::test]
    async fn test_messages_in_log_channel_are_not_tracked() {
        let tracker = MessageTracker::new(10);
        let alice = create_test_user(1, "alice", Some(1), false);
        let message = create_test_message(10, LOG_CHANNEL_ID, GUILD_ID, &alice, "hi");

        track_message(
            &tracker,
            &message,
            UserId::new(RELAY_USER_ID),
            Some(ChannelId::new(LOG_CHANNEL_ID)),
        )
        .await;

        assert_eq!(tracker.tracked_count().await, 0);
    }

    /// Tests that other bots' messages are still tracked so their deletions can be reported.
    #[tokio::test]
    async fn test_other_bot_messages_are_tracked() {
        let tracker = MessageTracker::new(10);
        let other_bot = create_test_user(2, "helper", Some(7), true);
        let message = create_test_message(10, CHAT_CHANNEL_ID, GUILD_ID, &other_bot, "beep");

        track_message(
            &tracker,
            &message,
            UserId::new(RELAY_USER_ID),
            Some(ChannelId::new(LOG_CHANNEL_ID)),
        )
        .await;

        assert_eq!(
            tracker.get(MessageId::new(10)).await,
            Some(TrackedMessage {
                author: Actor::new("helper#0007", true),
                content: "beep".to_string(),
            })
        );
    }

    /// Tests that a deletion handled before its creation was snapshotted is
    /// still logged, with an unknown author.
    #[tokio::test]
    async fn test_delete_racing_creation_logs_unknown_author() {
        let tracker = MessageTracker::new(10);
        let alice = create_test_user(1, "alice", Some(1), false);
        let message = create_test_message(10, CHAT_CHANNEL_ID, GUILD_ID, &alice, "oops");

        let event = deleted_event(tracker.take(message.id).await);
        track_message(
            &tracker,
            &message,
            UserId::new(RELAY_USER_ID),
            Some(ChannelId::new(LOG_CHANNEL_ID)),
        )
        .await;

        assert_eq!(
            event,
            AuditEvent::MessageDeleted {
                author: Actor::unknown(),
                content: None,
            }
        );
    }
}
