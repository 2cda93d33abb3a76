//! In-process event dispatcher
//!
//! Routes each event to the handlers registered under its name, calling
//! them one after another on the caller's thread.

use crate::config::DispatcherConfig;
use evd_domain::error::{Error, HandlerFailure, Result};
use evd_domain::events::{
    DomainEvent, EventDispatcher, FailurePolicy, HandlerRegistry, SharedEventHandler,
    same_handler,
};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

/// Event dispatcher backed by an in-memory registry
///
/// The registry lock is released before any handler runs, so a handler
/// may register or unregister handlers itself; such changes apply from
/// the next `notify`.
#[derive(Default)]
pub struct InProcessEventDispatcher {
    registry: RwLock<HandlerRegistry>,
    policy: FailurePolicy,
}

impl InProcessEventDispatcher {
    /// Create an empty fail-fast dispatcher
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty dispatcher with the given failure policy
    pub fn with_policy(policy: FailurePolicy) -> Self {
        Self {
            registry: RwLock::default(),
            policy,
        }
    }

    /// Create an empty dispatcher from configuration
    pub fn from_config(config: &DispatcherConfig) -> Self {
        Self::with_policy(config.failure_policy)
    }

    /// Create as Arc for sharing
    pub fn new_shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Failure policy applied by `notify`
    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    // A panicking handler never holds the lock, and registry updates are
    // single `Vec`/`HashMap` calls, so a poisoned registry is still valid.
    fn read(&self) -> RwLockReadGuard<'_, HandlerRegistry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HandlerRegistry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl std::fmt::Debug for InProcessEventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.read();
        let mut counts: Vec<(&str, usize)> = registry
            .iter()
            .map(|(name, handlers)| (name.as_str(), handlers.len()))
            .collect();
        counts.sort_unstable();
        f.debug_struct("InProcessEventDispatcher")
            .field("policy", &self.policy)
            .field("handlers", &counts)
            .finish()
    }
}

impl EventDispatcher for InProcessEventDispatcher {
    fn register(&self, event_name: &str, handler: SharedEventHandler) {
        debug!(event = event_name, handler = handler.name(), "Registering handler");
        self.write()
            .entry(event_name.to_string())
            .or_default()
            .push(handler);
    }

    fn unregister(&self, event_name: &str, handler: &SharedEventHandler) {
        let mut registry = self.write();
        let Some(handlers) = registry.get_mut(event_name) else {
            return;
        };
        if let Some(index) = handlers.iter().position(|h| same_handler(h, handler)) {
            handlers.remove(index);
            debug!(event = event_name, handler = handler.name(), "Unregistered handler");
        }
    }

    fn unregister_all(&self) {
        debug!("Clearing handler registry");
        self.write().clear();
    }

    fn notify(&self, event: &dyn DomainEvent) -> Result<()> {
        let name = event.event_name();
        // Copy out so no lock is held while handlers run
        let handlers = match self.read().get(name) {
            Some(handlers) if !handlers.is_empty() => handlers.clone(),
            _ => {
                debug!(event = name, "No handlers registered");
                return Ok(());
            }
        };

        debug!(event = name, handlers = handlers.len(), policy = ?self.policy, "Dispatching event");
        match self.policy {
            FailurePolicy::FailFast => dispatch_fail_fast(event, &handlers),
            FailurePolicy::Isolate => dispatch_isolated(event, &handlers),
        }
    }

    fn event_handlers(&self) -> HandlerRegistry {
        self.read().clone()
    }

    fn handlers_for(&self, event_name: &str) -> Option<Vec<SharedEventHandler>> {
        self.read().get(event_name).cloned()
    }
}

/// Run handlers in order, stopping at the first failure
fn dispatch_fail_fast(event: &dyn DomainEvent, handlers: &[SharedEventHandler]) -> Result<()> {
    for handler in handlers {
        if let Err(err) = handler.handle(event) {
            warn!(
                event = event.event_name(),
                handler = handler.name(),
                error = %err,
                "Handler failed, skipping remaining handlers"
            );
            return Err(Error::handler(handler.name(), event.event_name(), err));
        }
    }
    Ok(())
}

/// Run every handler, collecting failures in invocation order
fn dispatch_isolated(event: &dyn DomainEvent, handlers: &[SharedEventHandler]) -> Result<()> {
    let failures: Vec<HandlerFailure> = handlers
        .iter()
        .filter_map(|handler| {
            handler.handle(event).err().map(|error| {
                warn!(
                    event = event.event_name(),
                    handler = handler.name(),
                    error = %error,
                    "Handler failed"
                );
                HandlerFailure {
                    handler: handler.name().to_string(),
                    error,
                }
            })
        })
        .collect();

    if failures.is_empty() {
        Ok(())
    } else {
        Err(Error::HandlersFailed {
            event: event.event_name().to_string(),
            failures,
        })
    }
}
