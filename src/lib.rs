//! # actor-core
//!
//! A lightweight, BEAM-inspired actor runtime: bounded mailboxes, async
//! message passing, and supervision trees with automatic restart.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use actor_core::prelude::*;
//! use async_trait::async_trait;
//! use serde_json::Value;
//! use std::collections::HashMap;
//!
//! struct Counter {
//!     count: u64,
//! }
//!
//! #[async_trait]
//! impl Behavior for Counter {
//!     async fn handle(&mut self, ctx: &mut ActorContext, mut msg: Message) -> Result<(), BehaviorError> {
//!         match msg.msg_type() {
//!             "increment" => self.count += 1,
//!             "get" => {
//!                 if let Some(reply_to) = msg.take_reply_to() {
//!                     let _ = reply_to.reply(Message::new("count", Value::from(self.count)));
//!                 }
//!             }
//!             _ => {}
//!         }
//!         Ok(())
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let system = System::new()?;
//!     system.start()?;
//!     let counter = system.spawn_actor("counter", Counter { count: 0 }, HashMap::new())?;
//!     counter.send(Message::new("increment", Value::Null)).await?;
//!     let reply = counter
//!         .send_and_wait("get", Value::Null, DEFAULT_REQUEST_TIMEOUT)
//!         .await?;
//!     assert_eq!(reply.payload(), &Value::from(1));
//!     Ok(())
//! }
//! ```
//!
//! # Module organization
//!
//! - [`actor`] — the `Behavior` trait, `ActorRef`/`ActorContext`, and the
//!   lifecycle state machine a supervisor tracks restarts with.
//! - [`mailbox`] — bounded, single-consumer FIFO mailboxes.
//! - [`message`] — the `Message` envelope and request/reply machinery.
//! - [`supervisor`] — `Supervisor` and its three restart strategies.
//! - [`registry`] — system-wide `ActorId -> ActorRef` lookup.
//! - [`system`] — `System` (a root supervisor plus registry) and
//!   `SystemManager` for hosting more than one system per process.
//! - [`monitoring`] — event tracking for observability.
//! - [`error`] — the runtime's single error taxonomy.
//! - [`util`] — `ActorId`, `MessageId`.
//!
//! # Design notes
//!
//! - A mailbox's capacity is fixed at 100 messages; backpressure is
//!   `Timeout`/`MailboxFull` on the sender rather than an unbounded queue.
//! - A `Behavior::handle` that returns `Err` ends that actor's dispatch
//!   loop; recovery is exclusively the supervisor's job ("let it crash").
//! - Actor lifetimes are scoped with `tokio_util::sync::CancellationToken`:
//!   stopping a parent cancels every descendant's token.

pub mod actor;
pub mod error;
pub mod mailbox;
pub mod message;
pub mod monitoring;
pub mod prelude;
pub mod registry;
pub mod supervisor;
pub mod system;
pub mod util;

pub use actor::{
    ActorContext, ActorLifecycle, ActorRef, ActorState, Behavior, BehaviorError,
    DEFAULT_REQUEST_TIMEOUT,
};
pub use error::Error;
pub use mailbox::{Mailbox, MailboxError, MailboxSender, DEFAULT_SEND_TIMEOUT, MAILBOX_CAPACITY};
pub use message::{Message, ReplyChannel, ReplyError};
pub use monitoring::{
    ActorEvent, ActorEventKind, EventSeverity, InMemoryMonitor, MailboxEvent, MailboxEventKind,
    Monitor, MonitoringConfig, MonitoringError, MonitoringEvent, MonitoringSnapshot, NoopMonitor,
    RuntimeMonitor, SupervisionEvent, SupervisionEventKind, SystemEvent, SystemEventKind,
};
pub use registry::Registry;
pub use supervisor::{ChildState, SupervisionStrategy, Supervisor};
pub use system::{ActorSystemOptions, System, SystemManager};
pub use util::{ActorId, MessageId};
