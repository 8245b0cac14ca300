//! `Registry`: the system-wide `ActorId -> ActorRef` lookup table.
//!
//! Registration happens alongside `ActorRef::spawn` rather than instead of
//! it: a parent's children map is the authority for the supervision tree,
//! this registry is the authority for system-wide lookup by id regardless
//! of where in the tree an actor lives.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use dashmap::DashMap;

// Layer 3: Internal module imports
use crate::actor::ActorRef;
use crate::error::Error;
use crate::util::ActorId;

/// Lock-free map from [`ActorId`] to [`ActorRef`], shared by every actor in
/// a [`crate::system::System`].
#[derive(Default)]
pub struct Registry {
    actors: DashMap<ActorId, ActorRef>,
}

impl Registry {
    pub fn new() -> Self {
        Self {
            actors: DashMap::new(),
        }
    }

    /// Register `actor` under `id`. Fails if `id` is already registered.
    pub fn register(&self, id: ActorId, actor: ActorRef) -> Result<(), Error> {
        if self.actors.contains_key(&id) {
            return Err(Error::DuplicateId(id));
        }
        self.actors.insert(id, actor);
        Ok(())
    }

    /// Remove `id` from the registry, returning its ref if present.
    pub fn unregister(&self, id: &ActorId) -> Option<ActorRef> {
        self.actors.remove(id).map(|(_, actor)| actor)
    }

    pub fn get(&self, id: &ActorId) -> Option<ActorRef> {
        self.actors.get(id).map(|entry| entry.clone())
    }

    pub fn exists(&self, id: &ActorId) -> bool {
        self.actors.contains_key(id)
    }

    pub fn list(&self) -> Vec<ActorId> {
        self.actors.iter().map(|entry| entry.key().clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[tokio::test]
    async fn test_register_and_get() {
        let registry = Registry::new();
        let (actor, _rx) = ActorRef::new_root("a".into());
        registry.register("a".into(), actor).unwrap();
        assert!(registry.get(&"a".into()).is_some());
    }

    #[tokio::test]
    async fn test_duplicate_register_rejected() {
        let registry = Registry::new();
        let (actor, _rx) = ActorRef::new_root("a".into());
        registry.register("a".into(), actor.clone()).unwrap();
        let err = registry.register("a".into(), actor);
        assert!(matches!(err, Err(Error::DuplicateId(_))));
    }

    #[tokio::test]
    async fn test_unregister_removes_entry() {
        let registry = Registry::new();
        let (actor, _rx) = ActorRef::new_root("a".into());
        registry.register("a".into(), actor).unwrap();
        assert!(registry.unregister(&"a".into()).is_some());
        assert!(!registry.exists(&"a".into()));
    }

    #[tokio::test]
    async fn test_list_reflects_registered_ids() {
        let registry = Registry::new();
        let (root, _rx) = ActorRef::new_root("root".into());
        let child = root.spawn("child", NoopTestBehavior, HashMap::new()).unwrap();
        registry.register("root".into(), root).unwrap();
        registry.register("child".into(), child).unwrap();
        let mut ids: Vec<String> = registry.list().iter().map(|id| id.as_str().to_string()).collect();
        ids.sort();
        assert_eq!(ids, vec!["child".to_string(), "root".to_string()]);
    }

    struct NoopTestBehavior;

    #[async_trait::async_trait]
    impl crate::actor::Behavior for NoopTestBehavior {
        async fn handle(
            &mut self,
            _ctx: &mut crate::actor::ActorContext,
            _msg: crate::message::Message,
        ) -> Result<(), crate::actor::BehaviorError> {
            Ok(())
        }
    }
}
