//! `Supervisor`: composition over an `ActorRef` that restarts failed
//! children according to a [`SupervisionStrategy`].
//!
//! A supervisor is itself an actor: `spawn` attaches a [`SupervisorBehavior`]
//! that reacts to the reserved `child_failed` message, which every spawned
//! actor sends to its parent when its own `Behavior::handle` returns `Err`.

// Layer 1: Standard library imports
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;

// Layer 2: Third-party crate imports
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde_json::Value;

// Layer 3: Internal module imports
use crate::actor::behavior::{Behavior, BehaviorError};
use crate::actor::cell::ActorRef;
use crate::actor::context::ActorContext;
use crate::error::Error;
use crate::message::{Message, CHILD_FAILED};
use crate::supervisor::types::{
    ChildState, SupervisionStrategy, DEFAULT_MAX_RESTARTS, DEFAULT_WITHIN_DURATION,
};
use crate::util::ActorId;

type BehaviorFactory = dyn Fn() -> Box<dyn Behavior> + Send + Sync;

struct ChildSpec {
    factory: Arc<BehaviorFactory>,
    initial_state: HashMap<String, Value>,
}

struct Shared {
    strategy: SupervisionStrategy,
    max_restarts: u32,
    within_duration: Duration,
    order: Mutex<Vec<ActorId>>,
    specs: Mutex<HashMap<ActorId, ChildSpec>>,
    history: Mutex<HashMap<ActorId, VecDeque<DateTime<Utc>>>>,
    given_up: Mutex<HashSet<ActorId>>,
}

impl Shared {
    /// Record a restart attempt for `id` against the sliding window, pruning
    /// entries outside `within_duration`. Returns `false` once the count of
    /// restarts still inside the window exceeds `max_restarts`.
    fn record_restart_allowed(&self, id: &ActorId) -> bool {
        let now = Utc::now();
        let window = chrono::Duration::from_std(self.within_duration).unwrap_or(chrono::Duration::zero());
        let mut history = self.history.lock();
        let entry = history.entry(id.clone()).or_default();
        while let Some(front) = entry.front() {
            if now.signed_duration_since(*front) > window {
                entry.pop_front();
            } else {
                break;
            }
        }
        entry.push_back(now);
        entry.len() as u32 <= self.max_restarts
    }

    fn restart_targets(&self, failed: &ActorId) -> Vec<ActorId> {
        let order = self.order.lock();
        match self.strategy {
            SupervisionStrategy::OneForOne => vec![failed.clone()],
            SupervisionStrategy::OneForAll => order.clone(),
            SupervisionStrategy::RestForOne => match order.iter().position(|id| id == failed) {
                Some(idx) => order[idx..].to_vec(),
                None => vec![failed.clone()],
            },
        }
    }

    fn push_restart_timestamp(&self, id: &ActorId) {
        self.history.lock().entry(id.clone()).or_default().push_back(Utc::now());
    }

    fn restart_count(&self, id: &ActorId) -> u32 {
        self.history.lock().get(id).map(|h| h.len() as u32).unwrap_or(0)
    }

    async fn stop_target(&self, supervisor: &ActorRef, id: &ActorId) {
        if let Some(child) = supervisor.get_child(id) {
            if child.is_started() {
                let _ = child.stop().await;
            }
        }
    }

    /// Stop and respawn the child at `id`, carrying its evicted instance's
    /// live state forward. Restart = stop + start of the same actor
    /// instance, not a reset to the spec the child was first spawned with.
    async fn restart_one(&self, supervisor: &ActorRef, id: &ActorId) {
        let spec = {
            let specs = self.specs.lock();
            specs
                .get(id)
                .map(|s| (Arc::clone(&s.factory), s.initial_state.clone()))
        };
        let Some((factory, initial_state)) = spec else {
            return;
        };
        let old = supervisor.remove_child(id);
        let state = match &old {
            Some(old) => old.get_state(),
            None => initial_state,
        };
        if let Some(old) = old {
            if old.is_started() {
                let _ = old.stop().await;
            }
        }
        if let Ok(child) = supervisor.spawn(id.clone(), factory(), state) {
            let _ = child.start();
        }
    }

    async fn handle_child_failed(&self, supervisor: &ActorRef, failed: ActorId) {
        if self.given_up.lock().contains(&failed) {
            return;
        }
        let targets = self.restart_targets(&failed);

        supervisor
            .monitor()
            .record_child_failed(supervisor.id(), &failed, self.restart_count(&failed))
            .await;

        let allowed = self.record_restart_allowed(&failed);
        for id in &targets {
            if id != &failed {
                self.push_restart_timestamp(id);
            }
        }

        if !allowed {
            for id in &targets {
                self.given_up.lock().insert(id.clone());
                self.stop_target(supervisor, id).await;
            }
            supervisor
                .monitor()
                .record_restart_limit_exceeded(
                    supervisor.id(),
                    &failed,
                    self.restart_count(&failed),
                    self.within_duration,
                )
                .await;
            return;
        }

        for id in &targets {
            self.restart_one(supervisor, id).await;
            supervisor
                .monitor()
                .record_child_restarted(supervisor.id(), id, self.restart_count(id))
                .await;
        }
    }

    fn child_state(&self, id: &ActorId) -> ChildState {
        if self.given_up.lock().contains(id) {
            ChildState::GivenUp
        } else if self.history.lock().get(id).is_some_and(|h| !h.is_empty()) {
            ChildState::Restarting
        } else {
            ChildState::Running
        }
    }
}

/// The behavior attached to a supervisor's own `ActorRef`: its mailbox only
/// ever receives `child_failed` notifications from its children.
struct SupervisorBehavior {
    shared: Arc<Shared>,
}

#[async_trait]
impl Behavior for SupervisorBehavior {
    async fn handle(&mut self, ctx: &mut ActorContext, msg: Message) -> Result<(), BehaviorError> {
        if msg.msg_type() != CHILD_FAILED {
            return Ok(());
        }
        if let Value::String(child_id) = msg.payload() {
            self.shared
                .handle_child_failed(ctx.actor_ref(), ActorId::new(child_id.clone()))
                .await;
        }
        Ok(())
    }
}

/// A supervisor: an actor that owns a set of children and restarts them per
/// a [`SupervisionStrategy`] when they report failure.
pub struct Supervisor {
    actor: ActorRef,
    shared: Arc<Shared>,
}

impl Supervisor {
    /// Spawn a supervisor under `parent` with the default restart budget
    /// (10 restarts within 60 seconds).
    pub fn spawn(
        parent: &ActorRef,
        id: impl Into<ActorId>,
        strategy: SupervisionStrategy,
    ) -> Result<Supervisor, Error> {
        Self::spawn_with(parent, id, strategy, DEFAULT_MAX_RESTARTS, DEFAULT_WITHIN_DURATION)
    }

    /// Spawn a supervisor with an explicit restart budget.
    pub fn spawn_with(
        parent: &ActorRef,
        id: impl Into<ActorId>,
        strategy: SupervisionStrategy,
        max_restarts: u32,
        within_duration: Duration,
    ) -> Result<Supervisor, Error> {
        let shared = Arc::new(Shared {
            strategy,
            max_restarts,
            within_duration,
            order: Mutex::new(Vec::new()),
            specs: Mutex::new(HashMap::new()),
            history: Mutex::new(HashMap::new()),
            given_up: Mutex::new(HashSet::new()),
        });
        let behavior = SupervisorBehavior {
            shared: Arc::clone(&shared),
        };
        let actor = parent.spawn(id, behavior, HashMap::new())?;
        Ok(Supervisor { actor, shared })
    }

    pub fn id(&self) -> &ActorId {
        self.actor.id()
    }

    pub fn actor_ref(&self) -> &ActorRef {
        &self.actor
    }

    pub fn start(&self) -> Result<(), Error> {
        self.actor.start()
    }

    pub async fn stop(&self) -> Result<(), Error> {
        self.actor.stop().await
    }

    /// Spawn and start a child whose behavior is produced by `factory`.
    /// `factory` is kept around so the child can be rebuilt fresh on
    /// restart; it must not carry per-instance state the restarted child
    /// shouldn't see again.
    pub fn spawn_child<B, F>(
        &self,
        id: impl Into<ActorId>,
        factory: F,
        initial_state: HashMap<String, Value>,
    ) -> Result<ActorRef, Error>
    where
        B: Behavior,
        F: Fn() -> B + Send + Sync + 'static,
    {
        let id = id.into();
        let child = self.actor.spawn(id.clone(), factory(), initial_state.clone())?;
        child.start()?;
        let boxed: Arc<BehaviorFactory> = Arc::new(move || Box::new(factory()) as Box<dyn Behavior>);
        self.shared.specs.lock().insert(
            id.clone(),
            ChildSpec {
                factory: boxed,
                initial_state,
            },
        );
        self.shared.order.lock().push(id);
        Ok(child)
    }

    pub fn child_state(&self, id: &ActorId) -> ChildState {
        self.shared.child_state(id)
    }

    pub fn strategy(&self) -> SupervisionStrategy {
        self.shared.strategy
    }
}
