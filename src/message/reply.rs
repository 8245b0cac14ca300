//! Single-slot reply rendezvous for request/reply messaging.

// Layer 1: Standard library imports
use std::fmt;
use std::sync::Arc;

// Layer 2: Third-party crate imports
use parking_lot::Mutex;
use tokio::sync::oneshot;

// Layer 3: Internal module imports
use crate::message::message::Message;

/// The writer half of a reply rendezvous.
///
/// Wrapped in a mutex around an `Option` so that concurrent cancellation and
/// a late reply can never race: whichever side observes `Some` first takes
/// it, and every later caller sees `None` and gets `ReplyError::AlreadyUsed`.
/// Cloning shares the same underlying slot.
#[derive(Clone)]
pub struct ReplyChannel {
    slot: Arc<Mutex<Option<oneshot::Sender<Message>>>>,
}

impl fmt::Debug for ReplyChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReplyChannel").finish_non_exhaustive()
    }
}

/// The reader half of a reply rendezvous, held by the original caller.
pub struct ReplyWaiter {
    receiver: oneshot::Receiver<Message>,
}

/// Error returned when a reply cannot be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReplyError {
    /// A reply was already sent, or the waiter was dropped (scope canceled).
    #[error("reply channel already used or its waiter is gone")]
    AlreadyUsed,
}

impl ReplyChannel {
    /// Create a paired reply channel and waiter.
    pub fn pair() -> (ReplyChannel, ReplyWaiter) {
        let (tx, rx) = oneshot::channel();
        (
            ReplyChannel {
                slot: Arc::new(Mutex::new(Some(tx))),
            },
            ReplyWaiter { receiver: rx },
        )
    }

    /// Deliver a reply. Succeeds at most once; a second call, or a call
    /// after the waiter's scope was canceled, returns `ReplyError::AlreadyUsed`.
    pub fn reply(&self, msg: Message) -> Result<(), ReplyError> {
        let sender = self.slot.lock().take().ok_or(ReplyError::AlreadyUsed)?;
        sender.send(msg).map_err(|_| ReplyError::AlreadyUsed)
    }
}

impl ReplyWaiter {
    /// Await the reply.
    pub async fn recv(self) -> Result<Message, ReplyError> {
        self.receiver.await.map_err(|_| ReplyError::AlreadyUsed)
    }
}
