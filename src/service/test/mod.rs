use std::collections::HashSet;
use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use serenity::{
    all::{ChannelId, GuildId},
    async_trait,
};

use crate::{
    error::AppError,
    model::{actor::Actor, event::AuditEvent},
    service::delivery::LogSink,
};

mod delivery;

const GUILD_ID: u64 = 111_111_111;
const OTHER_GUILD_ID: u64 = 222_222_222;
const LOG_CHANNEL_ID: u64 = 333_333_333;

/// In-memory sink recording every send.
#[derive(Default)]
struct RecordingSink {
    channels: HashSet<(GuildId, ChannelId)>,
    fail_sends: bool,
    sent: Mutex<Vec<(ChannelId, String)>>,
}

impl RecordingSink {
    /// Sink where the log channel exists in `GUILD_ID` only.
    fn with_log_channel() -> Self {
        let mut sink = Self::default();
        sink.channels
            .insert((GuildId::new(GUILD_ID), ChannelId::new(LOG_CHANNEL_ID)));
        sink
    }

    fn failing() -> Self {
        Self {
            fail_sends: true,
            ..Self::with_log_channel()
        }
    }

    fn sent(&self) -> Vec<(ChannelId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl LogSink for RecordingSink {
    fn lookup(&self, guild_id: GuildId, channel_id: ChannelId) -> bool {
        self.channels.contains(&(guild_id, channel_id))
    }

    async fn send(&self, channel_id: ChannelId, content: &str) -> Result<(), AppError> {
        self.sent
            .lock()
            .unwrap()
            .push((channel_id, content.to_string()));

        if self.fail_sends {
            return Err(serenity::Error::Other("send rejected").into());
        }

        Ok(())
    }
}

/// 2024-03-01 14:05:09 in Sao Paulo.
fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 17, 5, 9).unwrap()
}

fn user(tag: &str) -> Actor {
    Actor::new(tag, false)
}

fn bot(tag: &str) -> Actor {
    Actor::new(tag, true)
}

fn banned(tag: &str) -> AuditEvent {
    AuditEvent::MemberBanned {
        user: tag.to_string(),
    }
}
