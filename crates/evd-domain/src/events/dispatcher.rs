//! Event Dispatcher Domain Port
//!
//! Defines the contract for routing domain events to the handlers
//! registered under their name. Producers depend on this trait only;
//! the in-process implementation lives in the infrastructure layer.

use super::domain_event::{DomainEvent, SharedEventHandler};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Snapshot of the handler registry: event name to handlers, in
/// registration order
pub type HandlerRegistry = HashMap<String, Vec<SharedEventHandler>>;

/// What `notify` does when a handler returns an error
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Stop at the first failure and return it; later handlers do not run
    #[default]
    FailFast,
    /// Run every handler, then report all failures together
    Isolate,
}

/// Domain Port for Dispatching Events
///
/// Handlers are invoked synchronously, on the caller's thread, in the order
/// they were registered. Unregistering an unknown handler and notifying an
/// event nobody listens to are both silent no-ops.
///
/// # Example
///
/// ```rust,no_run
/// use evd_domain::events::{EventDispatcher, NamedEvent, ProductCreatedEvent, SharedEventHandler};
///
/// fn wire(dispatcher: &dyn EventDispatcher, on_product: SharedEventHandler) {
///     dispatcher.register(ProductCreatedEvent::NAME, on_product);
/// }
/// ```
pub trait EventDispatcher: Send + Sync {
    /// Append `handler` to the handlers of `event_name`
    ///
    /// The same handler registered twice runs twice.
    fn register(&self, event_name: &str, handler: SharedEventHandler);

    /// Remove the first reference to `handler` (by identity) from `event_name`
    ///
    /// The event name stays registered, possibly with no handlers left.
    fn unregister(&self, event_name: &str, handler: &SharedEventHandler);

    /// Forget every event name and handler
    fn unregister_all(&self);

    /// Invoke every handler registered for the event's name, in order
    fn notify(&self, event: &dyn DomainEvent) -> Result<()>;

    /// Copy of the current registry
    ///
    /// Changing the returned map has no effect on the dispatcher.
    fn event_handlers(&self) -> HandlerRegistry;

    /// Handlers registered for one event name, `None` if it was never
    /// registered (or the registry was cleared since)
    fn handlers_for(&self, event_name: &str) -> Option<Vec<SharedEventHandler>> {
        self.event_handlers().remove(event_name)
    }
}

/// Shared event dispatcher for dependency injection
pub type SharedEventDispatcher = Arc<dyn EventDispatcher>;
