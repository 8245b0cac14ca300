//! Messages and the request/reply machinery built on top of them.

pub mod message;
pub mod reply;

pub use message::{Message, CHILD_FAILED};
pub use reply::{ReplyChannel, ReplyError, ReplyWaiter};
