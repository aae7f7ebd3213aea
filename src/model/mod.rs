//! Domain models for the audit relay.
//!
//! Gateway payloads from Serenity are converted into these types at the bot
//! boundary so that the service layer works with a closed set of plain data
//! types and never touches Discord's models directly.

pub mod actor;
pub mod event;
pub mod record;
