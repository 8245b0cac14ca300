//! Supervision: a `Supervisor` watches a set of children and restarts them
//! according to a [`SupervisionStrategy`] when one reports failure.
//!
//! ## Strategies
//!
//! - **OneForOne** — restart only the failed child.
//! - **OneForAll** — restart every child currently under supervision.
//! - **RestForOne** — restart the failed child and every child spawned
//!   after it, in spawn order.
//!
//! ## Restart budget
//!
//! A supervisor gives up on a child once it has restarted more than
//! `max_restarts` times within `within_duration` (default: 10 within 60
//! seconds). Once given up, the child stays down; its state is exposed via
//! [`Supervisor::child_state`] as [`ChildState::GivenUp`].

pub mod supervisor;
pub mod types;

pub use supervisor::Supervisor;
pub use types::{
    ChildEntry, ChildState, RestartRecord, SupervisionStrategy, SupervisorOptions,
    DEFAULT_MAX_RESTARTS, DEFAULT_WITHIN_DURATION,
};
