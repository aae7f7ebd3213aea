//! Test factories for creating Serenity API objects.
//!
//! When testing code that converts Serenity models into audit events, you need
//! real Serenity structs. These factories build them by deserializing JSON,
//! simulating what Discord's gateway would send, with sensible defaults for
//! every field the relay does not read.
//!
//! # Usage
//!
//! ```rust,ignore
//! use serenity::all::ChannelType;
//! use test_utils::serenity::{create_test_guild_channel, create_test_user};
//!
//! let user = create_test_user(123456789, "alice", Some(1), false);
//! let channel = create_test_guild_channel(111, 222, "general", ChannelType::Text);
//! ```
//!
//! # Available Factories
//!
//! - `user::create_test_user` - Create Serenity User objects
//! - `channel::create_test_guild_channel` - Create Serenity GuildChannel objects
//! - `message::create_test_message` - Create Serenity Message objects

pub mod channel;
pub mod message;
pub mod user;

// Re-export commonly used functions for convenience
pub use channel::create_test_guild_channel;
pub use message::create_test_message;
pub use user::create_test_user;
