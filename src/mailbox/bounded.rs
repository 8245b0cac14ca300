//! Bounded, single-consumer mailbox built on a tokio mpsc channel.

// Layer 1: Standard library imports
use std::time::Duration;

// Layer 2: Third-party crate imports
use tokio::sync::mpsc;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;

// Layer 3: Internal module imports
use super::error::MailboxError;
use crate::message::Message;

/// Fixed mailbox capacity. Not configurable: every actor in the system gets
/// exactly this much buffering.
pub const MAILBOX_CAPACITY: usize = 100;

/// Default timeout applied to `Send` when the caller doesn't specify one.
pub const DEFAULT_SEND_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a linked sender/mailbox pair with the fixed system capacity.
pub fn channel() -> (MailboxSender, Mailbox) {
    let (tx, rx) = mpsc::channel(MAILBOX_CAPACITY);
    (MailboxSender { tx }, Mailbox { rx })
}

/// The write half of a mailbox. Cheap to clone; every `ActorRef` clone shares
/// the same underlying channel.
#[derive(Clone)]
pub struct MailboxSender {
    tx: mpsc::Sender<Message>,
}

impl MailboxSender {
    /// Enqueue a message, waiting up to `timeout_duration` if the mailbox is
    /// full. Returns as soon as `scope` is canceled, even if the timeout has
    /// not yet elapsed.
    pub async fn enqueue(
        &self,
        msg: Message,
        timeout_duration: Duration,
        scope: &CancellationToken,
    ) -> Result<(), MailboxError> {
        tokio::select! {
            biased;
            () = scope.cancelled() => Err(MailboxError::Closed),
            result = timeout(timeout_duration, self.tx.send(msg)) => {
                match result {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(_)) => Err(MailboxError::Closed),
                    Err(_elapsed) => Err(MailboxError::Full {
                        capacity: MAILBOX_CAPACITY,
                    }),
                }
            }
        }
    }

    /// True once every receiver clone (the mailbox) has been dropped.
    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// The read half of a mailbox. Not `Clone`: dequeue is single-consumer by
/// construction, owned exclusively by the actor's dispatch loop.
pub struct Mailbox {
    rx: mpsc::Receiver<Message>,
}

impl Mailbox {
    /// Wait for the next message, or `None` once `scope` is canceled or the
    /// channel is closed and drained.
    pub async fn dequeue(&mut self, scope: &CancellationToken) -> Option<Message> {
        tokio::select! {
            biased;
            () = scope.cancelled() => None,
            msg = self.rx.recv() => msg,
        }
    }
}
