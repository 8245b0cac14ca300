//! The actor runtime: a `Behavior` trait for message-handling logic, an
//! `ActorRef`/`ActorContext` pair for controlling and reacting from inside
//! it, and a lifecycle state machine supervisors use to track restarts.
//!
//! An actor's mailbox is drained serially by one dispatch task per actor
//! (spawned in [`cell::ActorRef::start`]): `on_start`, then `handle` once per
//! message until the actor's scope is canceled or its mailbox closes, then
//! `on_stop`. A `handle` that returns `Err` is reported to the actor's
//! parent as a reserved `child_failed` message rather than returned to
//! whoever sent the failing message.

pub mod behavior;
pub mod cell;
pub mod context;
pub mod lifecycle;

pub use behavior::{Behavior, BehaviorError, FnBehavior};
pub use cell::{ActorRef, DEFAULT_REQUEST_TIMEOUT};
pub use context::ActorContext;
pub use lifecycle::{ActorLifecycle, ActorState};
