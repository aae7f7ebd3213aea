use chrono::{DateTime, Utc};
use chrono_tz::{America::Sao_Paulo, Tz};

/// Civil timezone every audit timestamp is rendered in, independent of the
/// host's local zone.
pub const LOG_TIMEZONE: Tz = Sao_Paulo;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Formats an instant as `YYYY-MM-DD HH:mm:ss` in [`LOG_TIMEZONE`].
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.with_timezone(&LOG_TIMEZONE)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}
