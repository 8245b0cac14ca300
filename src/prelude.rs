//! Convenient re-export of the most commonly used types.
//!
//! ```rust
//! use actor_core::prelude::*;
//! ```

// Actor runtime
pub use crate::actor::{
    ActorContext, ActorLifecycle, ActorRef, ActorState, Behavior, BehaviorError,
    DEFAULT_REQUEST_TIMEOUT,
};

// Messaging
pub use crate::message::{Message, ReplyChannel, ReplyError};

// Mailbox
pub use crate::mailbox::{MailboxError, MailboxSender};

// Supervision
pub use crate::supervisor::{ChildState, SupervisionStrategy, Supervisor};

// Registry
pub use crate::registry::Registry;

// System
pub use crate::system::{ActorSystemOptions, System, SystemManager};

// Monitoring
pub use crate::monitoring::{
    ActorEvent, EventSeverity, InMemoryMonitor, MailboxEvent, Monitor, MonitoringEvent,
    NoopMonitor, RuntimeMonitor, SupervisionEvent,
};

// Errors and utilities
pub use crate::error::Error;
pub use crate::util::{ActorId, MessageId};
