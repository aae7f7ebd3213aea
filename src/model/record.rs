use std::fmt;

/// Longest text Discord accepts in a single message, in characters.
pub const MESSAGE_CHAR_LIMIT: usize = 2000;

/// A finished audit line, `[timestamp] <icon> <message>`.
///
/// Opaque to everything downstream; the sink sends its text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub timestamp: String,
    pub body: String,
}

impl LogRecord {
    pub fn new(timestamp: String, body: String) -> Self {
        Self { timestamp, body }
    }

    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.timestamp, self.body)
    }
}

/// What happened to a record after the destination lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// The destination resolved and a send was issued. A failed send still
    /// counts as delivered; it is logged where it happens and not retried.
    Delivered,
    /// The configured channel does not exist in the event's guild.
    DestinationUnresolved,
}
