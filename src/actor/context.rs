//! `ActorContext`: the handle a [`Behavior`](crate::actor::behavior::Behavior)
//! uses to read/write its own state, spawn children, and reply to requests.

// Layer 1: Standard library imports
use std::collections::HashMap;

// Layer 2: Third-party crate imports
use serde_json::Value;

// Layer 3: Internal module imports
use crate::actor::behavior::Behavior;
use crate::actor::cell::ActorRef;
use crate::error::Error;
use crate::message::Message;
use crate::util::ActorId;

/// Passed to every [`Behavior`] method. Wraps the actor's own [`ActorRef`]
/// so a behavior never needs to hold one itself.
pub struct ActorContext {
    actor: ActorRef,
}

impl ActorContext {
    pub(crate) fn new(actor: ActorRef) -> Self {
        Self { actor }
    }

    /// Build a context around a standalone `ActorRef` for unit tests that
    /// exercise a `Behavior` without going through a running dispatch loop.
    #[cfg(test)]
    pub(crate) fn for_test(actor: &ActorRef) -> Self {
        Self {
            actor: actor.clone(),
        }
    }

    pub fn id(&self) -> &ActorId {
        self.actor.id()
    }

    pub fn actor_ref(&self) -> &ActorRef {
        &self.actor
    }

    pub fn parent(&self) -> Option<&ActorRef> {
        self.actor.parent()
    }

    /// Read one key from this actor's own state map.
    pub fn get_state(&self, key: &str) -> Option<Value> {
        self.actor.get_state_value(key)
    }

    /// Write one key into this actor's own state map.
    pub fn set_state(&self, key: impl Into<String>, value: Value) {
        self.actor.set_state_value(key, value)
    }

    /// Spawn a child actor under this one.
    pub fn spawn(
        &self,
        id: impl Into<ActorId>,
        behavior: impl Behavior,
        initial_state: HashMap<String, Value>,
    ) -> Result<ActorRef, Error> {
        self.actor.spawn(id, behavior, initial_state)
    }

    /// Reply to a message sent via `SendAndWait`, consuming its reply
    /// channel. Fails with `NoReplyChannel` if the message was fire-and-forget.
    pub fn reply(
        &self,
        original: &mut Message,
        msg_type: impl Into<String>,
        payload: Value,
    ) -> Result<(), Error> {
        let reply_to = original.take_reply_to().ok_or(Error::NoReplyChannel)?;
        reply_to
            .reply(Message::new(msg_type, payload))
            .map_err(Error::from_reply)
    }
}
