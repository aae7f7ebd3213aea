//! Event normalization rules.
//!
//! Maps each [`AuditEvent`] to the body of at most one log line. The rules
//! that suppress output (bot authors, unchanged edits, voice channel switches)
//! are explicit branches here so they can be tested on their own.

use crate::model::event::AuditEvent;

/// Most characters of user content echoed into a single record, leaving room
/// for the timestamp, icon and author tag within Discord's message limit.
const CONTENT_CHAR_LIMIT: usize = 1800;

/// Per-side limit for edits, which echo both the old and the new content.
const EDIT_CONTENT_CHAR_LIMIT: usize = 900;

/// Renders the body of the log line for an event, without the timestamp.
///
/// Returns `None` when the event is not worth reporting:
/// - messages and reactions from bot accounts, which would otherwise include
///   the relay's own posts in the log channel
/// - edits whose content did not change (embed unfurls, pin toggles)
pub fn render(event: &AuditEvent) -> Option<String> {
    match event {
        AuditEvent::MessageCreated { author, .. } if author.bot => None,
        AuditEvent::MessageCreated { author, content } => Some(format!(
            "[MSG] {}: {}",
            author.tag,
            clip(content, CONTENT_CHAR_LIMIT)
        )),

        AuditEvent::MessageEdited { before, after, .. }
            if before.as_deref() == Some(after.as_str()) =>
        {
            None
        }
        AuditEvent::MessageEdited {
            author,
            before,
            after,
        } => Some(format!(
            "✏️ {} edited a message.\nBefore: \"{}\"\nAfter: \"{}\"",
            author.tag,
            clip(before.as_deref().unwrap_or_default(), EDIT_CONTENT_CHAR_LIMIT),
            clip(after, EDIT_CONTENT_CHAR_LIMIT)
        )),

        AuditEvent::MessageDeleted { author, content } => Some(format!(
            "🗑️ {}'s message deleted: \"{}\"",
            author.tag,
            clip(content.as_deref().unwrap_or_default(), CONTENT_CHAR_LIMIT)
        )),

        AuditEvent::ReactionAdded { reactor, .. } if reactor.bot => None,
        AuditEvent::ReactionAdded {
            reactor,
            emoji,
            message_author,
        } => Some(format!(
            "👍 {} reacted \"{}\" on {}'s message",
            reactor.tag, emoji, message_author
        )),

        AuditEvent::ReactionRemoved { reactor, .. } if reactor.bot => None,
        AuditEvent::ReactionRemoved {
            reactor,
            emoji,
            message_author,
        } => Some(format!(
            "👋 {} removed reaction \"{}\" on {}'s message",
            reactor.tag, emoji, message_author
        )),

        AuditEvent::VoiceJoined { member, channel } => {
            Some(format!("🎤 {} joined voice channel {}", member, channel))
        }
        AuditEvent::VoiceLeft { member, channel } => {
            Some(format!("🔇 {} left voice channel {}", member, channel))
        }

        AuditEvent::ChannelCreated { name, kind } => {
            Some(format!("📂 channel created: {} ({})", name, kind))
        }
        AuditEvent::ChannelDeleted { name, kind } => {
            Some(format!("🗑️ channel deleted: {} ({})", name, kind))
        }

        AuditEvent::MemberJoined { member } => Some(format!("📥 {} joined the server", member)),
        AuditEvent::MemberLeft { member } => Some(format!("📤 {} left the server", member)),

        AuditEvent::MemberBanned { user } => Some(format!("🚫 {} was banned", user)),
        AuditEvent::MemberUnbanned { user } => Some(format!("✅ {} was unbanned", user)),
    }
}

/// Shortens `text` to at most `limit` characters, marking the cut with `…`.
pub fn clip(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }

    let mut clipped: String = text.chars().take(limit.saturating_sub(1)).collect();
    clipped.push('…');
    clipped
}

/// Classifies a voice state change by the channel names before and after it.
///
/// Only joining from no channel or leaving to no channel is reported. Moving
/// directly between two voice channels produces no event, and neither does an
/// update that stays out of voice (mute or deafen toggles while disconnected).
pub fn voice_transition(
    member: &str,
    previous: Option<&str>,
    current: Option<&str>,
) -> Option<AuditEvent> {
    match (previous, current) {
        (None, Some(joined)) => Some(AuditEvent::VoiceJoined {
            member: member.to_string(),
            channel: joined.to_string(),
        }),
        (Some(left), None) => Some(AuditEvent::VoiceLeft {
            member: member.to_string(),
            channel: left.to_string(),
        }),
        (Some(_), Some(_)) => None,
        (None, None) => None,
    }
}
