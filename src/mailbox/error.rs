//! Mailbox-level error types.

use thiserror::Error;

/// Errors returned while enqueuing a message.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum MailboxError {
    /// The mailbox was already at capacity when the enqueue timeout elapsed.
    #[error("mailbox full (capacity {capacity})")]
    Full { capacity: usize },

    /// The owning actor has stopped; its receiver has been dropped.
    #[error("mailbox closed, actor stopped")]
    Closed,
}
