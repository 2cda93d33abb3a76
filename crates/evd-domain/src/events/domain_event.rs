//! Event and handler contracts
//!
//! A domain event is an immutable fact with a type identifier and a payload.
//! Handlers react to events; they never return data to the producer, only
//! success or failure.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// An immutable notification raised by the domain
///
/// The dispatcher routes events by [`DomainEvent::event_name`], so two
/// event types must never share a name.
pub trait DomainEvent: Any + Send + Sync + fmt::Debug {
    /// Type identifier used as the registry key
    fn event_name(&self) -> &str;

    /// Instant the event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Payload as JSON, for handlers that do not know the concrete type
    fn event_data(&self) -> Result<serde_json::Value>;

    /// Concrete value, for downcasting
    fn as_any(&self) -> &dyn Any;
}

/// An event type with a fixed, compile-time name
///
/// Wiring code registers handlers under `E::NAME` instead of repeating
/// string literals.
pub trait NamedEvent: DomainEvent {
    /// Type identifier shared by every instance
    const NAME: &'static str;
}

/// Downcast an event to the concrete type a handler expects
///
/// Fails with [`Error::EventTypeMismatch`] naming both events.
///
/// # Example
///
/// ```rust
/// use evd_domain::events::{downcast_event, DomainEvent, ProductCreatedData, ProductCreatedEvent};
///
/// let event = ProductCreatedEvent::new(ProductCreatedData {
///     name: "Product 1".to_string(),
///     description: "Product 1 description".to_string(),
///     price: 10.0,
/// });
/// let erased: &dyn DomainEvent = &event;
/// let product = downcast_event::<ProductCreatedEvent>(erased).unwrap();
/// assert_eq!(product.data.name, "Product 1");
/// ```
pub fn downcast_event<E: NamedEvent>(event: &dyn DomainEvent) -> Result<&E> {
    event
        .as_any()
        .downcast_ref::<E>()
        .ok_or_else(|| Error::event_type_mismatch(E::NAME, event.event_name()))
}

/// Reacts to one kind of domain event
///
/// Handlers run synchronously on the thread that called `notify`.
/// Returning an error stops the dispatch under the default failure policy.
pub trait EventHandler: Send + Sync {
    /// Handle a single event
    fn handle(&self, event: &dyn DomainEvent) -> Result<()>;

    /// Name used in logs and error reports
    ///
    /// The default uses `type_name::<Self>()`, which can be verbose.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handler reference held by the dispatcher
pub type SharedEventHandler = Arc<dyn EventHandler>;

/// Identity comparison between two handler references
///
/// Compares the data pointers only; two `Arc`s built from distinct
/// allocations are never the same handler, even if they are equal values.
pub fn same_handler(a: &SharedEventHandler, b: &SharedEventHandler) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
