//! Guild Audit Relay Test Utils
//!
//! Shared testing utilities for the relay. Provides factories that build
//! Serenity model objects from JSON so conversions from gateway payloads can
//! be tested without a Discord connection.

pub mod serenity;
