//! `System`: a root supervisor plus the registry every actor in its tree is
//! visible through.

// Layer 1: Standard library imports
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

// Layer 2: Third-party crate imports
use serde_json::Value;

// Layer 3: Internal module imports
use crate::actor::{ActorRef, Behavior};
use crate::error::Error;
use crate::registry::Registry;
use crate::supervisor::{Supervisor, SupervisionStrategy, SupervisorOptions};
use crate::util::ActorId;

/// Default id given to a system's root supervisor when none is specified.
pub const DEFAULT_ROOT_ID: &str = "root";

/// Default name given to a system when none is specified.
pub const DEFAULT_SYSTEM_NAME: &str = "system";

/// Options controlling how `System::with_options` builds a system: its name
/// and the restart policy of its root supervisor.
#[derive(Debug, Clone)]
pub struct ActorSystemOptions {
    pub name: String,
    pub supervisor_options: SupervisorOptions,
}

impl Default for ActorSystemOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_SYSTEM_NAME.to_string(),
            supervisor_options: SupervisorOptions::default(),
        }
    }
}

/// A running actor system: one root [`Supervisor`] plus a system-wide
/// [`Registry`] every spawned actor is registered into, regardless of its
/// position in the supervision tree.
///
/// A freshly constructed system is not started: the root supervisor's
/// dispatch loop only begins after an explicit call to [`System::start`].
/// `spawn_actor`, `spawn_supervisor`, and `stop` all fail with
/// [`Error::NotStarted`] until then.
pub struct System {
    name: String,
    root: Supervisor,
    registry: Registry,
    started: AtomicBool,
}

impl System {
    /// Build a system whose root supervisor uses `ONE_FOR_ONE` and the
    /// default restart budget, under the default name. Does not start it —
    /// call [`System::start`] before spawning anything.
    pub fn new() -> Result<Self, Error> {
        Self::with_options(ActorSystemOptions::default())
    }

    /// Build a system with an explicit name and root supervisor policy.
    pub fn with_options(options: ActorSystemOptions) -> Result<Self, Error> {
        let (unparented, _rx) = ActorRef::new_root("__system_root_parent__".into());
        let sup_opts = options.supervisor_options;
        let root = Supervisor::spawn_with(
            &unparented,
            sup_opts.id,
            sup_opts.strategy,
            sup_opts.max_restarts,
            sup_opts.within_duration,
        )?;
        let registry = Registry::new();
        registry.register(root.id().clone(), root.actor_ref().clone())?;
        Ok(Self {
            name: options.name,
            root,
            registry,
            started: AtomicBool::new(false),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Supervisor {
        &self.root
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn is_started(&self) -> bool {
        self.started.load(Ordering::SeqCst)
    }

    /// Start the root supervisor's dispatch loop. Fails with
    /// [`Error::AlreadyStarted`] if the system is already running.
    pub fn start(&self) -> Result<(), Error> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyStarted(self.root.id().clone()));
        }
        self.root.start()
    }

    /// Spawn a plain actor as a child of the root supervisor, started
    /// immediately and registered for system-wide lookup.
    pub fn spawn_actor(
        &self,
        id: impl Into<ActorId>,
        behavior: impl Behavior,
        initial_state: HashMap<String, Value>,
    ) -> Result<ActorRef, Error> {
        if !self.is_started() {
            return Err(Error::NotStarted(self.root.id().clone()));
        }
        let id = id.into();
        let actor = self.root.actor_ref().spawn(id.clone(), behavior, initial_state)?;
        actor.start()?;
        self.registry.register(id, actor.clone())?;
        Ok(actor)
    }

    /// Spawn a nested supervisor as a child of the root supervisor.
    pub fn spawn_supervisor(
        &self,
        id: impl Into<ActorId>,
        strategy: SupervisionStrategy,
    ) -> Result<Supervisor, Error> {
        if !self.is_started() {
            return Err(Error::NotStarted(self.root.id().clone()));
        }
        let sup = Supervisor::spawn(self.root.actor_ref(), id, strategy)?;
        sup.start()?;
        self.registry.register(sup.id().clone(), sup.actor_ref().clone())?;
        Ok(sup)
    }

    pub fn get_actor(&self, id: &ActorId) -> Option<ActorRef> {
        self.registry.get(id)
    }

    /// Stop the system: cascades from the root supervisor down through
    /// every descendant. Fails with [`Error::NotStarted`] if the system was
    /// never started.
    pub async fn stop(&self) -> Result<(), Error> {
        if !self.started.swap(false, Ordering::SeqCst) {
            return Err(Error::NotStarted(self.root.id().clone()));
        }
        self.root.stop().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::actor::{ActorContext, BehaviorError};
    use crate::message::Message;

    struct Echo;

    #[async_trait]
    impl Behavior for Echo {
        async fn handle(
            &mut self,
            _ctx: &mut ActorContext,
            mut msg: Message,
        ) -> Result<(), BehaviorError> {
            if let Some(reply_to) = msg.take_reply_to() {
                let _ = reply_to.reply(Message::new("pong", Value::Null));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_spawn_actor_is_registered() {
        let system = System::new().unwrap();
        system.start().unwrap();
        let actor = system.spawn_actor("worker", Echo, HashMap::new()).unwrap();
        assert_eq!(system.get_actor(&"worker".into()).unwrap().id(), actor.id());
    }

    #[tokio::test]
    async fn test_root_supervisor_registered_under_default_id() {
        let system = System::new().unwrap();
        assert!(system.get_actor(&DEFAULT_ROOT_ID.into()).is_some());
    }

    #[tokio::test]
    async fn test_stop_cascades_through_tree() {
        let system = System::new().unwrap();
        system.start().unwrap();
        let actor = system.spawn_actor("worker", Echo, HashMap::new()).unwrap();
        system.stop().await.unwrap();
        assert!(!actor.is_started());
    }

    #[tokio::test]
    async fn test_spawn_actor_before_start_errors() {
        let system = System::new().unwrap();
        let err = system.spawn_actor("worker", Echo, HashMap::new());
        assert!(matches!(err, Err(Error::NotStarted(_))));
    }

    #[tokio::test]
    async fn test_stop_before_start_errors() {
        let system = System::new().unwrap();
        let err = system.stop().await;
        assert!(matches!(err, Err(Error::NotStarted(_))));
    }

    #[tokio::test]
    async fn test_double_start_errors() {
        let system = System::new().unwrap();
        system.start().unwrap();
        let err = system.start();
        assert!(matches!(err, Err(Error::AlreadyStarted(_))));
    }

    #[tokio::test]
    async fn test_name_defaults_to_system() {
        let system = System::new().unwrap();
        assert_eq!(system.name(), DEFAULT_SYSTEM_NAME);
    }
}
