//! The runtime's single error taxonomy.
//!
//! Every fallible operation in this crate — spawning, sending, supervising,
//! replying — returns one of these kinds. Keeping them in one enum instead
//! of per-module variants means a caller that escalates an error upward
//! never has to convert between incompatible error types.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use thiserror::Error;

// Layer 3: Internal module imports
use crate::mailbox::MailboxError;
use crate::message::ReplyError;
use crate::util::ActorId;

/// Runtime error taxonomy.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// `Spawn` was called with an id already registered under the same parent.
    #[error("duplicate actor id: {0}")]
    DuplicateId(ActorId),

    /// Lookup by id found nothing.
    #[error("actor not found: {0}")]
    NotFound(ActorId),

    /// An operation that requires a running actor was issued before `Start`.
    #[error("actor not started: {0}")]
    NotStarted(ActorId),

    /// `Start` was called on an actor that is already running.
    #[error("actor already started: {0}")]
    AlreadyStarted(ActorId),

    /// The target mailbox was full and did not drain before the timeout.
    #[error("mailbox full for actor {0}")]
    MailboxFull(ActorId),

    /// The target actor had already stopped, or stopped mid-delivery.
    #[error("actor stopped: {0}")]
    ActorStopped(ActorId),

    /// `SendAndWait` did not receive a reply before its timeout elapsed.
    #[error("timed out waiting for reply from {0}")]
    Timeout(ActorId),

    /// `Reply` was called on a message that carries no reply channel.
    #[error("message has no reply channel")]
    NoReplyChannel,

    /// A supervisor exhausted its restart budget for a child and gave up.
    #[error("supervisor gave up restarting child {0}")]
    SupervisorGiveUp(ActorId),
}

impl Error {
    /// Build the appropriate variant from a mailbox-level error plus the
    /// id of the actor whose mailbox it was.
    pub fn from_mailbox(err: MailboxError, actor: ActorId) -> Self {
        match err {
            MailboxError::Full { .. } => Error::MailboxFull(actor),
            MailboxError::Closed => Error::ActorStopped(actor),
        }
    }

    /// Build from a reply-channel error; reply channels don't carry an
    /// actor id, so this maps to `NoReplyChannel`.
    pub fn from_reply(_err: ReplyError) -> Self {
        Error::NoReplyChannel
    }
}
