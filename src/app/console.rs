// TabDeck - app/console.rs
//
// Console message store and the message-source collaborator contract.
//
// Producers (a page engine, a network stack, the demo seeder) hold a
// cloneable `MessageSink` and may live on any thread; the UI thread polls
// the paired `MessageFeed` once per frame without blocking. The log itself
// is append-only: messages are immutable once stored and leave only via a
// user-initiated clear-all.

use crate::core::model::Message;
use crate::util::constants::{MAX_CONSOLE_MESSAGES, MAX_FEED_MESSAGES_PER_FRAME};
use std::sync::mpsc;

// =============================================================================
// Message channel (source collaborator)
// =============================================================================

/// Producer handle for pushing diagnostic messages to the console.
#[derive(Debug, Clone)]
pub struct MessageSink {
    tx: mpsc::Sender<Message>,
}

impl MessageSink {
    /// Push one message. Delivery failures (the UI shut down) are ignored;
    /// diagnostics are best-effort by design.
    pub fn push(&self, message: Message) {
        let _ = self.tx.send(message);
    }
}

/// Consumer side, polled by the UI thread.
#[derive(Debug)]
pub struct MessageFeed {
    rx: mpsc::Receiver<Message>,
}

impl MessageFeed {
    /// Drain pending messages without blocking, bounded per frame so a
    /// burst cannot stall the render loop.
    pub fn poll(&self) -> Vec<Message> {
        let mut messages = Vec::new();
        while messages.len() < MAX_FEED_MESSAGES_PER_FRAME {
            match self.rx.try_recv() {
                Ok(msg) => messages.push(msg),
                Err(_) => break,
            }
        }
        messages
    }
}

/// Create a connected sink/feed pair.
pub fn message_channel() -> (MessageSink, MessageFeed) {
    let (tx, rx) = mpsc::channel();
    (MessageSink { tx }, MessageFeed { rx })
}

// =============================================================================
// Message log
// =============================================================================

/// Append-only store of diagnostic messages.
///
/// Assigns each message its id (insertion order) on append and enforces the
/// session cap: once `capacity` is reached, further messages are counted and
/// dropped with a single logged warning rather than growing the log.
#[derive(Debug)]
pub struct MessageLog {
    messages: Vec<Message>,
    capacity: usize,
    next_id: u64,
    dropped: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            messages: Vec::new(),
            capacity: capacity.min(MAX_CONSOLE_MESSAGES),
            next_id: 0,
            dropped: 0,
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Messages dropped since the last clear because the log was full.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Append a message, assigning its id. Returns the id, or None when the
    /// log is full and the message was dropped.
    pub fn push(&mut self, mut message: Message) -> Option<u64> {
        if self.messages.len() >= self.capacity {
            if self.dropped == 0 {
                tracing::warn!(
                    capacity = self.capacity,
                    "Console log full; dropping further messages until cleared"
                );
            }
            self.dropped += 1;
            return None;
        }
        message.id = self.next_id;
        self.next_id += 1;
        let id = message.id;
        self.messages.push(message);
        Some(id)
    }

    /// User-initiated clear-all. Ids keep increasing across clears so
    /// expansion state held elsewhere can never alias a new message.
    pub fn clear(&mut self) {
        let removed = self.messages.len();
        self.messages.clear();
        self.dropped = 0;
        tracing::debug!(removed, "Console cleared");
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(MAX_CONSOLE_MESSAGES)
    }
}
