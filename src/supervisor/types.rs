//! Supervision strategy and per-child bookkeeping types.

// Layer 1: Standard library imports
use std::time::Duration;

// Layer 2: Third-party crate imports
use chrono::{DateTime, Utc};

// Layer 3: Internal module imports
use crate::util::ActorId;

/// How a supervisor reacts when one of its children reports failure via the
/// reserved `child_failed` message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisionStrategy {
    /// Restart only the failed child.
    OneForOne,

    /// Restart every child currently under supervision.
    OneForAll,

    /// Restart the failed child and every child spawned after it, in spawn
    /// order.
    RestForOne,
}

impl Default for SupervisionStrategy {
    fn default() -> Self {
        Self::OneForOne
    }
}

/// Default restart budget: at most 10 restarts within 60 seconds before a
/// supervisor gives up on a child.
pub const DEFAULT_MAX_RESTARTS: u32 = 10;
pub const DEFAULT_WITHIN_DURATION: Duration = Duration::from_secs(60);

/// Options a caller can pass to configure a supervisor's restart budget up
/// front instead of taking the defaults.
#[derive(Debug, Clone)]
pub struct SupervisorOptions {
    pub id: String,
    pub strategy: SupervisionStrategy,
    pub max_restarts: u32,
    pub within_duration: Duration,
}

impl Default for SupervisorOptions {
    fn default() -> Self {
        Self {
            id: crate::system::DEFAULT_ROOT_ID.to_string(),
            strategy: SupervisionStrategy::default(),
            max_restarts: DEFAULT_MAX_RESTARTS,
            within_duration: DEFAULT_WITHIN_DURATION,
        }
    }
}

/// A single recorded restart, used to evaluate the sliding restart window.
#[derive(Debug, Clone, Copy)]
pub struct RestartRecord {
    pub at: DateTime<Utc>,
}

/// Current supervision state of one child, as tracked by its supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChildState {
    Running,
    Restarting,
    GivenUp,
}

/// A handle's worth of bookkeeping a supervisor keeps per child, alongside
/// the `ActorRef` itself: state and restart history.
#[derive(Debug, Clone)]
pub struct ChildEntry {
    pub id: ActorId,
    pub state: ChildState,
}

impl ChildEntry {
    pub fn new(id: ActorId) -> Self {
        Self {
            id,
            state: ChildState::Running,
        }
    }
}
