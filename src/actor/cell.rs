//! `ActorRef`: the handle through which every actor operation (`Spawn`,
//! `Start`, `Stop`, `Send`, `SendAndWait`, `GetState`) is performed.

// Layer 1: Standard library imports
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

// Layer 2: Third-party crate imports
use parking_lot::{Mutex, RwLock};
use serde_json::Value;
use tokio::task::JoinHandle;
use tokio::time::timeout as tokio_timeout;
use tokio_util::sync::CancellationToken;

// Layer 3: Internal module imports
use crate::actor::behavior::Behavior;
use crate::actor::context::ActorContext;
use crate::error::Error;
use crate::mailbox::{self, MailboxSender, DEFAULT_SEND_TIMEOUT};
use crate::message::{Message, ReplyChannel};
use crate::monitoring::RuntimeMonitor;
use crate::util::ActorId;

/// Default timeout for `SendAndWait` when the caller doesn't specify one.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Behavior and mailbox receiver, held until `start` moves them into the
/// dispatch task.
struct Pending {
    behavior: Box<dyn Behavior>,
    mailbox: mailbox::Mailbox,
}

struct Inner {
    id: ActorId,
    mailbox_tx: MailboxSender,
    scope: CancellationToken,
    state: RwLock<HashMap<String, Value>>,
    children: RwLock<HashMap<ActorId, ActorRef>>,
    parent: Option<ActorRef>,
    started: AtomicBool,
    pending: Mutex<Option<Pending>>,
    join: Mutex<Option<JoinHandle<()>>>,
    monitor: RuntimeMonitor,
}

/// A cloneable handle to a spawned (or not-yet-started) actor.
///
/// Cloning is cheap — it shares one `Arc<Inner>` — so an `ActorRef` can be
/// held by its parent, passed to children as `parent`, and captured by the
/// dispatch task simultaneously.
#[derive(Clone)]
pub struct ActorRef {
    inner: Arc<Inner>,
}

impl ActorRef {
    fn new_cell(
        id: ActorId,
        scope: CancellationToken,
        parent: Option<ActorRef>,
        state: HashMap<String, Value>,
    ) -> (Self, mailbox::Mailbox) {
        let (tx, rx) = mailbox::channel();
        let monitor = parent
            .as_ref()
            .map(|p| p.inner.monitor.clone())
            .unwrap_or_default();
        let actor = Self {
            inner: Arc::new(Inner {
                id,
                mailbox_tx: tx,
                scope,
                state: RwLock::new(state),
                children: RwLock::new(HashMap::new()),
                parent,
                started: AtomicBool::new(false),
                pending: Mutex::new(None),
                join: Mutex::new(None),
                monitor,
            }),
        };
        (actor, rx)
    }

    /// Construct an unparented, behaviorless root cell. Real systems attach
    /// a root supervisor behavior via `spawn`'s sibling path in `System`;
    /// this constructor exists for building the top of that hierarchy and
    /// for tests that only need an id/state/children surface.
    pub fn new_root(id: ActorId) -> (Self, mailbox::Mailbox) {
        Self::new_cell(id, CancellationToken::new(), None, HashMap::new())
    }

    pub fn id(&self) -> &ActorId {
        &self.inner.id
    }

    pub fn parent(&self) -> Option<&ActorRef> {
        self.inner.parent.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.inner.started.load(Ordering::SeqCst)
    }

    pub fn scope(&self) -> &CancellationToken {
        &self.inner.scope
    }

    /// The monitor shared across this actor's whole tree (children inherit
    /// their parent's instance at spawn time).
    pub fn monitor(&self) -> &RuntimeMonitor {
        &self.inner.monitor
    }

    /// Spawn a child actor under this one. Registers it in the children map
    /// immediately but does not start its dispatch loop — call `start` on
    /// the returned ref (or let a `Supervisor` do it).
    pub fn spawn(
        &self,
        id: impl Into<ActorId>,
        behavior: impl Behavior,
        initial_state: HashMap<String, Value>,
    ) -> Result<ActorRef, Error> {
        let id = id.into();
        let mut children = self.inner.children.write();
        if children.contains_key(&id) {
            return Err(Error::DuplicateId(id));
        }
        let child_scope = self.inner.scope.child_token();
        let (child, mailbox) = Self::new_cell(id.clone(), child_scope, Some(self.clone()), initial_state);
        *child.inner.pending.lock() = Some(Pending {
            behavior: Box::new(behavior),
            mailbox,
        });
        children.insert(id, child.clone());
        Ok(child)
    }

    /// Start the dispatch loop: runs `on_start`, then serially drains the
    /// mailbox through `handle` until the scope is canceled or the mailbox
    /// closes, then runs `on_stop`. Fails if already started.
    pub fn start(&self) -> Result<(), Error> {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return Err(Error::AlreadyStarted(self.inner.id.clone()));
        }
        let Pending { mut behavior, mut mailbox } = self
            .inner
            .pending
            .lock()
            .take()
            .unwrap_or_else(|| Pending {
                behavior: Box::new(NoopBehavior),
                mailbox: mailbox::channel().1,
            });
        let actor = self.clone();
        let scope = self.inner.scope.clone();
        let handle = tokio::spawn(async move {
            let mut ctx = ActorContext::new(actor.clone());
            if behavior.on_start(&mut ctx).await.is_err() {
                return;
            }
            while let Some(msg) = mailbox.dequeue(&scope).await {
                if let Err(err) = behavior.handle(&mut ctx, msg).await {
                    actor.monitor().record_actor_error(actor.id(), err.to_string()).await;
                    match actor.parent() {
                        // Supervised: a failed handle ends this actor's run;
                        // the parent owns deciding whether to restart it.
                        Some(parent) => {
                            let notice = Message::child_failed(actor.id());
                            let _ =
                                parent.send_with_timeout(notice, DEFAULT_SEND_TIMEOUT).await;
                            break;
                        }
                        // Unsupervised: nothing will ever restart this actor,
                        // so the error is not fatal and the loop keeps going.
                        None => continue,
                    }
                }
            }
            behavior.on_stop(&mut ctx).await;
            actor.inner.started.store(false, Ordering::SeqCst);
        });
        *self.inner.join.lock() = Some(handle);
        Ok(())
    }

    /// Stop this actor and cascade to all of its descendants. Cancels the
    /// scope (which `tokio_util` propagates to every child token derived
    /// from it) and waits for the dispatch task to exit.
    pub async fn stop(&self) -> Result<(), Error> {
        if !self.inner.started.load(Ordering::SeqCst) {
            return Err(Error::NotStarted(self.inner.id.clone()));
        }
        let children: Vec<ActorRef> = self.inner.children.read().values().cloned().collect();
        for child in &children {
            if child.is_started() {
                Box::pin(child.stop()).await.ok();
            }
        }
        self.inner.scope.cancel();
        let handle = self.inner.join.lock().take();
        if let Some(handle) = handle {
            let _ = handle.await;
        }
        self.inner.started.store(false, Ordering::SeqCst);
        Ok(())
    }

    /// Fire-and-forget send with the default timeout.
    pub async fn send(&self, msg: Message) -> Result<(), Error> {
        self.send_with_timeout(msg, DEFAULT_SEND_TIMEOUT).await
    }

    pub async fn send_with_timeout(&self, msg: Message, send_timeout: Duration) -> Result<(), Error> {
        self.inner
            .mailbox_tx
            .enqueue(msg, send_timeout, &self.inner.scope)
            .await
            .map_err(|e| Error::from_mailbox(e, self.inner.id.clone()))
    }

    /// Send a message and await a single reply, failing after `request_timeout`.
    pub async fn send_and_wait(
        &self,
        msg_type: impl Into<String>,
        payload: Value,
        request_timeout: Duration,
    ) -> Result<Message, Error> {
        let (reply_tx, reply_rx) = ReplyChannel::pair();
        let msg = Message::new(msg_type, payload).with_reply_to(reply_tx);
        self.send(msg).await?;
        match tokio_timeout(request_timeout, reply_rx.recv()).await {
            Ok(Ok(reply)) => Ok(reply),
            Ok(Err(_)) | Err(_) => Err(Error::Timeout(self.inner.id.clone())),
        }
    }

    pub fn get_state(&self) -> HashMap<String, Value> {
        self.inner.state.read().clone()
    }

    pub(crate) fn get_state_value(&self, key: &str) -> Option<Value> {
        self.inner.state.read().get(key).cloned()
    }

    pub(crate) fn set_state_value(&self, key: impl Into<String>, value: Value) {
        self.inner.state.write().insert(key.into(), value);
    }

    pub fn get_child(&self, id: &ActorId) -> Option<ActorRef> {
        self.inner.children.read().get(id).cloned()
    }

    pub fn child_ids(&self) -> Vec<ActorId> {
        self.inner.children.read().keys().cloned().collect()
    }

    /// Drop a child's entry from this actor's children map without stopping
    /// it. Used by `Supervisor` to evict a crashed child before respawning a
    /// fresh cell under the same id.
    pub(crate) fn remove_child(&self, id: &ActorId) -> Option<ActorRef> {
        self.inner.children.write().remove(id)
    }
}

/// Fallback behavior for a cell that somehow starts with nothing attached;
/// drains its (empty) mailbox and exits immediately.
struct NoopBehavior;

#[async_trait::async_trait]
impl Behavior for NoopBehavior {
    async fn handle(
        &mut self,
        _ctx: &mut ActorContext,
        _msg: Message,
    ) -> Result<(), crate::actor::behavior::BehaviorError> {
        Ok(())
    }
}
