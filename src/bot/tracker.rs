//! In-memory snapshots of recent guild messages.
//!
//! Discord's delete event carries only the message id, and edit events do not
//! include the previous content. The tracker keeps the author and content of
//! the most recent messages so both can still be logged. It is bounded and
//! evicts the oldest snapshot first.
//!
//! Snapshots are taken from the message handler, which runs in its own task
//! like every other gateway event. A delete or edit handled before that task
//! stores its snapshot finds nothing and is logged as for an untracked message.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use serenity::all::{Message, MessageId};
use tokio::sync::RwLock;

use crate::model::actor::Actor;

/// Author and content of a message as last seen on the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedMessage {
    pub author: Actor,
    pub content: String,
}

#[derive(Default)]
struct Inner {
    messages: HashMap<MessageId, TrackedMessage>,
    order: VecDeque<MessageId>,
}

/// Bounded store of message snapshots shared by the message handlers.
#[derive(Clone)]
pub struct MessageTracker {
    capacity: usize,
    inner: Arc<RwLock<Inner>>,
}

impl MessageTracker {
    /// Creates a tracker holding at most `capacity` messages. A capacity of zero
    /// disables tracking.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Arc::new(RwLock::new(Inner::default())),
        }
    }

    /// Stores a snapshot of a newly created message.
    pub async fn record(&self, message: &Message) {
        self.insert(
            message.id,
            TrackedMessage {
                author: Actor::from(&message.author),
                content: message.content.clone(),
            },
        )
        .await;
    }

    pub async fn insert(&self, id: MessageId, snapshot: TrackedMessage) {
        if self.capacity == 0 {
            return;
        }

        let mut inner = self.inner.write().await;

        if inner.messages.insert(id, snapshot).is_none() {
            inner.order.push_back(id);
        }

        while inner.order.len() > self.capacity {
            if let Some(oldest) = inner.order.pop_front() {
                inner.messages.remove(&oldest);
            }
        }
    }

    /// Returns the snapshot for a message without removing it.
    pub async fn get(&self, id: MessageId) -> Option<TrackedMessage> {
        self.inner.read().await.messages.get(&id).cloned()
    }

    /// Replaces the stored content of an edited message.
    ///
    /// # Returns
    /// - `Some(snapshot)` - The snapshot as it was before the edit
    /// - `None` - The message was not tracked; nothing is stored for it
    pub async fn update_content(
        &self,
        id: MessageId,
        content: &str,
    ) -> Option<TrackedMessage> {
        let mut inner = self.inner.write().await;
        let tracked = inner.messages.get_mut(&id)?;
        let previous = tracked.clone();
        tracked.content = content.to_string();

        Some(previous)
    }

    /// Removes and returns the snapshot of a deleted message.
    pub async fn take(&self, id: MessageId) -> Option<TrackedMessage> {
        let mut inner = self.inner.write().await;
        let removed = inner.messages.remove(&id)?;
        inner.order.retain(|tracked| *tracked != id);

        Some(removed)
    }

    #[cfg(test)]
    pub async fn tracked_count(&self) -> usize {
        self.inner.read().await.messages.len()
    }
}
