//! The closed set of guild events the relay reports on.
//!
//! Each variant carries only the fields needed to render its log line. Events
//! are built by the bot handlers from Serenity payloads, handed to the
//! dispatcher, and dropped once the record has been sent.

use serenity::all::{GuildChannel, ReactionType};

use crate::model::actor::Actor;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuditEvent {
    MessageCreated {
        author: Actor,
        content: String,
    },
    MessageEdited {
        author: Actor,
        /// Content before the edit, if it was still in the message cache.
        before: Option<String>,
        after: String,
    },
    MessageDeleted {
        author: Actor,
        /// Content of the deleted message, if it was still in the message cache.
        content: Option<String>,
    },
    ReactionAdded {
        reactor: Actor,
        emoji: String,
        /// Tag of the author of the message that was reacted to.
        message_author: String,
    },
    ReactionRemoved {
        reactor: Actor,
        emoji: String,
        message_author: String,
    },
    VoiceJoined {
        member: String,
        channel: String,
    },
    VoiceLeft {
        member: String,
        channel: String,
    },
    ChannelCreated {
        name: String,
        kind: String,
    },
    ChannelDeleted {
        name: String,
        kind: String,
    },
    MemberJoined {
        member: String,
    },
    MemberLeft {
        member: String,
    },
    MemberBanned {
        user: String,
    },
    MemberUnbanned {
        user: String,
    },
}

/// Event family, used to pick the icon and the unresolved-destination policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditEventKind {
    MessageCreated,
    MessageEdited,
    MessageDeleted,
    ReactionAdded,
    ReactionRemoved,
    VoiceJoined,
    VoiceLeft,
    ChannelCreated,
    ChannelDeleted,
    MemberJoined,
    MemberLeft,
    MemberBanned,
    MemberUnbanned,
}

impl AuditEvent {
    pub fn kind(&self) -> AuditEventKind {
        match self {
            Self::MessageCreated { .. } => AuditEventKind::MessageCreated,
            Self::MessageEdited { .. } => AuditEventKind::MessageEdited,
            Self::MessageDeleted { .. } => AuditEventKind::MessageDeleted,
            Self::ReactionAdded { .. } => AuditEventKind::ReactionAdded,
            Self::ReactionRemoved { .. } => AuditEventKind::ReactionRemoved,
            Self::VoiceJoined { .. } => AuditEventKind::VoiceJoined,
            Self::VoiceLeft { .. } => AuditEventKind::VoiceLeft,
            Self::ChannelCreated { .. } => AuditEventKind::ChannelCreated,
            Self::ChannelDeleted { .. } => AuditEventKind::ChannelDeleted,
            Self::MemberJoined { .. } => AuditEventKind::MemberJoined,
            Self::MemberLeft { .. } => AuditEventKind::MemberLeft,
            Self::MemberBanned { .. } => AuditEventKind::MemberBanned,
            Self::MemberUnbanned { .. } => AuditEventKind::MemberUnbanned,
        }
    }

    pub fn channel_created(channel: &GuildChannel) -> Self {
        Self::ChannelCreated {
            name: channel.name.clone(),
            kind: channel.kind.name().to_string(),
        }
    }

    pub fn channel_deleted(channel: &GuildChannel) -> Self {
        Self::ChannelDeleted {
            name: channel.name.clone(),
            kind: channel.kind.name().to_string(),
        }
    }
}

impl AuditEventKind {
    /// Voice events drop an unresolved destination silently; every other kind
    /// leaves a local diagnostic.
    pub fn reports_unresolved_destination(self) -> bool {
        !matches!(self, Self::VoiceJoined | Self::VoiceLeft)
    }
}

/// Renders a reaction the way it appears in chat: the unicode character, or the
/// name of a custom guild emoji.
pub fn emoji_name(reaction: &ReactionType) -> String {
    match reaction {
        ReactionType::Unicode(symbol) => symbol.clone(),
        ReactionType::Custom { name, id, .. } => {
            name.clone().unwrap_or_else(|| id.to_string())
        }
        other => other.to_string(),
    }
}
