//! `RuntimeMonitor`: the concrete observer wired into every actor and
//! supervisor, recording the diagnostics SPEC_FULL's dispatch-loop and
//! supervision sections call for (handler errors, restarts, give-ups)
//! without requiring callers to plumb a `Monitor<E>` through every `spawn`
//! call themselves.

// Layer 1: Standard library imports
use std::collections::HashMap;
use std::time::Duration;

// Layer 2: Third-party crate imports
use chrono::Utc;

// Layer 3: Internal module imports
use super::in_memory::InMemoryMonitor;
use super::traits::Monitor;
use super::types::{
    ActorEvent, ActorEventKind, MonitoringConfig, SupervisionEvent, SupervisionEventKind,
};
use crate::util::ActorId;

/// Pairs an `InMemoryMonitor<ActorEvent>` (handler errors, lifecycle) with an
/// `InMemoryMonitor<SupervisionEvent>` (restarts, give-ups). Cheap to clone —
/// every actor in a tree shares its parent's instance.
#[derive(Clone)]
pub struct RuntimeMonitor {
    actor: InMemoryMonitor<ActorEvent>,
    supervision: InMemoryMonitor<SupervisionEvent>,
}

impl RuntimeMonitor {
    pub fn new() -> Self {
        Self {
            actor: InMemoryMonitor::new(MonitoringConfig::default()),
            supervision: InMemoryMonitor::new(MonitoringConfig::default()),
        }
    }

    /// The underlying actor-event monitor, for callers that want a snapshot.
    pub fn actor_events(&self) -> &InMemoryMonitor<ActorEvent> {
        &self.actor
    }

    /// The underlying supervision-event monitor, for callers that want a snapshot.
    pub fn supervision_events(&self) -> &InMemoryMonitor<SupervisionEvent> {
        &self.supervision
    }

    /// Record a `Behavior::handle` failure. Called from the dispatch loop
    /// regardless of whether the actor has a supervisor, so an unsupervised
    /// actor's error is still diagnosable even though nothing restarts it.
    pub async fn record_actor_error(&self, actor_id: &ActorId, error: impl Into<String>) {
        let event = ActorEvent {
            timestamp: Utc::now(),
            actor_id: actor_id.clone(),
            event_kind: ActorEventKind::ErrorOccurred {
                error: error.into(),
            },
            metadata: HashMap::new(),
        };
        let _ = self.actor.record(event).await;
    }

    pub async fn record_child_failed(&self, supervisor_id: &ActorId, child_id: &ActorId, restart_count: u32) {
        let event = SupervisionEvent {
            timestamp: Utc::now(),
            supervisor_id: supervisor_id.as_str().to_string(),
            child_id: Some(child_id.as_str().to_string()),
            event_kind: SupervisionEventKind::ChildFailed {
                error: "child reported failure via child_failed".to_string(),
                restart_count,
            },
            metadata: HashMap::new(),
        };
        let _ = self.supervision.record(event).await;
    }

    pub async fn record_child_restarted(&self, supervisor_id: &ActorId, child_id: &ActorId, restart_count: u32) {
        let event = SupervisionEvent {
            timestamp: Utc::now(),
            supervisor_id: supervisor_id.as_str().to_string(),
            child_id: Some(child_id.as_str().to_string()),
            event_kind: SupervisionEventKind::ChildRestarted { restart_count },
            metadata: HashMap::new(),
        };
        let _ = self.supervision.record(event).await;
    }

    pub async fn record_restart_limit_exceeded(
        &self,
        supervisor_id: &ActorId,
        child_id: &ActorId,
        restart_count: u32,
        window: Duration,
    ) {
        let event = SupervisionEvent {
            timestamp: Utc::now(),
            supervisor_id: supervisor_id.as_str().to_string(),
            child_id: Some(child_id.as_str().to_string()),
            event_kind: SupervisionEventKind::RestartLimitExceeded {
                restart_count,
                window,
            },
            metadata: HashMap::new(),
        };
        let _ = self.supervision.record(event).await;
    }
}

impl Default for RuntimeMonitor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_record_actor_error_visible_in_snapshot() {
        let monitor = RuntimeMonitor::new();
        let id = ActorId::new("a");
        monitor.record_actor_error(&id, "boom").await;
        let snapshot = monitor.actor_events().snapshot().await.unwrap();
        assert_eq!(snapshot.total_events, 1);
        assert_eq!(snapshot.error_count, 1);
    }

    #[tokio::test]
    async fn test_record_restart_limit_exceeded_is_critical() {
        let monitor = RuntimeMonitor::new();
        let sup = ActorId::new("sup");
        let child = ActorId::new("child");
        monitor
            .record_restart_limit_exceeded(&sup, &child, 11, Duration::from_secs(60))
            .await;
        let snapshot = monitor.supervision_events().snapshot().await.unwrap();
        assert_eq!(snapshot.critical_count, 1);
    }
}
