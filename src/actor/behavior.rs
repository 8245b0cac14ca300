//! The `Behavior` trait: an actor's message-handling logic.

// Layer 1: Standard library imports
// (none)

// Layer 2: Third-party crate imports
use async_trait::async_trait;

// Layer 3: Internal module imports
use crate::actor::context::ActorContext;
use crate::message::Message;

/// An actor's message-handling logic, invoked serially by its dispatch loop.
///
/// `handle` is never called concurrently with itself for a given actor: the
/// dispatch loop awaits one invocation to completion before dequeuing the
/// next message, so implementations can freely mutate `self` without
/// synchronization.
///
/// A `Box<dyn Behavior>` is what `ActorRef::spawn` stores — the runtime
/// spawns actors whose behavior is supplied as a value at call time, so
/// behaviors are dynamically dispatched rather than monomorphized per actor
/// type.
#[async_trait]
pub trait Behavior: Send + 'static {
    /// Handle one message. A returned `Err` is reported to the actor's
    /// parent as a `child_failed` notification; it is never surfaced to the
    /// original sender.
    async fn handle(
        &mut self,
        ctx: &mut ActorContext,
        msg: Message,
    ) -> Result<(), BehaviorError>;

    /// Called once before the dispatch loop starts consuming messages.
    async fn on_start(&mut self, _ctx: &mut ActorContext) -> Result<(), BehaviorError> {
        Ok(())
    }

    /// Called once after the dispatch loop exits, before descendants are
    /// torn down.
    async fn on_stop(&mut self, _ctx: &mut ActorContext) {}
}

/// The error type a [`Behavior`] returns from a failed `handle`.
pub type BehaviorError = Box<dyn std::error::Error + Send + Sync>;

#[async_trait]
impl Behavior for Box<dyn Behavior> {
    async fn handle(
        &mut self,
        ctx: &mut ActorContext,
        msg: Message,
    ) -> Result<(), BehaviorError> {
        (**self).handle(ctx, msg).await
    }

    async fn on_start(&mut self, ctx: &mut ActorContext) -> Result<(), BehaviorError> {
        (**self).on_start(ctx).await
    }

    async fn on_stop(&mut self, ctx: &mut ActorContext) {
        (**self).on_stop(ctx).await
    }
}

/// Adapts a plain async closure into a [`Behavior`], for actors whose
/// handling logic doesn't need a dedicated struct.
pub struct FnBehavior<F> {
    f: F,
}

impl<F> FnBehavior<F> {
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

#[async_trait]
impl<F, Fut> Behavior for FnBehavior<F>
where
    F: FnMut(&mut ActorContext, Message) -> Fut + Send + 'static,
    Fut: std::future::Future<Output = Result<(), BehaviorError>> + Send,
{
    async fn handle(
        &mut self,
        ctx: &mut ActorContext,
        msg: Message,
    ) -> Result<(), BehaviorError> {
        (self.f)(ctx, msg).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::actor::cell::ActorRef;
    use serde_json::Value;

    #[tokio::test]
    async fn test_fn_behavior_handles_message() {
        let (root, _rx) = ActorRef::new_root("root".into());
        let mut ctx = ActorContext::for_test(&root);
        let mut behavior =
            FnBehavior::new(|_ctx: &mut ActorContext, _msg: Message| async { Ok(()) });
        let result = behavior
            .handle(&mut ctx, Message::new("x", Value::Null))
            .await;
        assert!(result.is_ok());
    }
}
