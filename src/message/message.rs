//! The wire format actors exchange: a type tag, an opaque payload, and an
//! optional reply channel.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use chrono::{DateTime, Utc};
use serde_json::Value;

// Layer 3: Internal module imports
use crate::message::reply::ReplyChannel;
use crate::util::{ActorId, MessageId};

/// Reserved message type delivered to a supervisor's own mailbox when one of
/// its children terminates abnormally. User behaviors must not send or
/// handle a message with this type.
pub const CHILD_FAILED: &str = "child_failed";

/// A message passed between actors.
///
/// The payload is an opaque [`serde_json::Value`] rather than a compile-time
/// generic type: the runtime spawns actors whose behavior is supplied as a
/// value at call time, so there is no single `Message` type to monomorphize
/// over. Construct one with [`Message::new`] and attach a sender or reply
/// channel with the builder methods.
#[derive(Debug, Clone)]
pub struct Message {
    id: MessageId,
    msg_type: String,
    payload: Value,
    sender: Option<ActorId>,
    reply_to: Option<ReplyChannel>,
    sent_at: DateTime<Utc>,
}

impl Message {
    /// Build a message with the given type tag and payload.
    pub fn new(msg_type: impl Into<String>, payload: Value) -> Self {
        Self {
            id: MessageId::new(),
            msg_type: msg_type.into(),
            payload,
            sender: None,
            reply_to: None,
            sent_at: Utc::now(),
        }
    }

    /// Attach the id of the sending actor.
    #[must_use]
    pub fn with_sender(mut self, sender: ActorId) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Attach a reply channel; used by `send_and_wait`.
    #[must_use]
    pub fn with_reply_to(mut self, reply_to: ReplyChannel) -> Self {
        self.reply_to = Some(reply_to);
        self
    }

    /// Build the reserved `child_failed` notification sent to a supervisor.
    pub fn child_failed(child_id: &ActorId) -> Self {
        Self::new(CHILD_FAILED, Value::String(child_id.as_str().to_string()))
    }

    pub fn id(&self) -> MessageId {
        self.id
    }

    pub fn msg_type(&self) -> &str {
        &self.msg_type
    }

    pub fn payload(&self) -> &Value {
        &self.payload
    }

    pub fn sender(&self) -> Option<&ActorId> {
        self.sender.as_ref()
    }

    pub fn sent_at(&self) -> DateTime<Utc> {
        self.sent_at
    }

    pub fn reply_to(&self) -> Option<&ReplyChannel> {
        self.reply_to.as_ref()
    }

    /// Take the reply channel, consuming this message's ability to be replied to.
    pub fn take_reply_to(&mut self) -> Option<ReplyChannel> {
        self.reply_to.take()
    }
}
