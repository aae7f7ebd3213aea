//! Discord gateway integration.
//!
//! The bot subscribes to the guild events the relay audits, converts each
//! Serenity payload into an [`AuditEvent`](crate::model::event::AuditEvent)
//! and hands it to the audit pipeline in [`crate::service`]. Serenity runs each
//! event handler in its own task, so a slow send for one event never holds up
//! the next.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Channel create/delete events and the guild cache used to resolve the log channel
//! - `GUILD_MESSAGES` - Message create, update and delete events
//! - `MESSAGE_CONTENT` - Message text (privileged intent)
//! - `GUILD_MEMBERS` - Member join and leave events (privileged intent)
//! - `GUILD_VOICE_STATES` - Voice channel joins and leaves
//! - `GUILD_MESSAGE_REACTIONS` - Reaction add and remove events
//! - `GUILD_MODERATION` - Ban and unban events
//!
//! Note: privileged intents must be explicitly enabled in the Discord Developer
//! Portal for the bot application, otherwise the gateway refuses the connection.

pub mod handler;
pub mod start;
pub mod tracker;
