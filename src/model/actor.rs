//! User identity as it appears in audit records.

use serenity::all::{Member, User};

/// Display tag used when the gateway did not tell us who was involved.
pub const UNKNOWN_USER: &str = "unknown user";

/// The user behind an event, reduced to what a log line needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    /// Human-readable tag (`name#0001`, or just `name` for users on the new
    /// username system).
    pub tag: String,
    /// Whether the account is a bot. Bot messages and reactions are not logged.
    pub bot: bool,
}

impl Actor {
    pub fn new(tag: impl Into<String>, bot: bool) -> Self {
        Self {
            tag: tag.into(),
            bot,
        }
    }

    /// Placeholder for an actor the gateway did not resolve.
    ///
    /// Never flagged as a bot, so events attributed to it are still logged.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_USER, false)
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self::new(user.tag(), user.bot)
    }
}

impl From<&Member> for Actor {
    fn from(member: &Member) -> Self {
        Self::from(&member.user)
    }
}
