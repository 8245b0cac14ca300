//! Bounded, single-consumer mailboxes.
//!
//! Every actor's mailbox has the same fixed capacity
//! ([`bounded::MAILBOX_CAPACITY`]) and a single receiver owned exclusively
//! by that actor's dispatch loop, so enqueue/dequeue ordering is FIFO and
//! dequeue is at-most-once by construction.

pub mod bounded;
pub mod error;

pub use bounded::{channel, Mailbox, MailboxSender, DEFAULT_SEND_TIMEOUT, MAILBOX_CAPACITY};
pub use error::MailboxError;
