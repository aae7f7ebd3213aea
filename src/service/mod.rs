//! Audit pipeline: normalization, timestamping and delivery.
//!
//! The bot handlers convert gateway payloads into [`AuditEvent`]s and pass them
//! to the [`AuditDispatcher`]. The dispatcher renders each event through the
//! normalizer, stamps it with the current Sao Paulo civil time, and hands the
//! finished line to the delivery guard, which looks up the log channel in the
//! event's guild and sends it.
//!
//! [`AuditEvent`]: crate::model::event::AuditEvent
//! [`AuditDispatcher`]: dispatcher::AuditDispatcher

pub mod delivery;
pub mod dispatcher;
pub mod normalizer;
pub mod timestamp;

#[cfg(test)]
mod test;
