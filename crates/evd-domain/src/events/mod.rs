//! Domain Events
//!
//! Domain events represent significant business occurrences that have happened
//! within the domain. Events are immutable facts that other parts of the system
//! can react to.
//!
//! ## Domain Events
//!
//! | Item | Description |
//! |------|-------------|
//! | [`DomainEvent`] | Base trait for all domain events |
//! | [`EventHandler`] | Reaction to one kind of event |
//! | [`EventDispatcher`] | Port routing events to their handlers |
//! | [`ProductCreatedEvent`] | A product was created |
//! | [`CustomerCreatedEvent`] | A customer was created |
//! | [`CustomerAddressChangedEvent`] | A customer moved |

/// Customer events
pub mod customer;
/// Dispatcher port
pub mod dispatcher;
/// Event and handler contracts
pub mod domain_event;
/// Product events
pub mod product;

pub use customer::{
    CustomerAddressChangedData, CustomerAddressChangedEvent, CustomerCreatedData,
    CustomerCreatedEvent,
};
pub use dispatcher::{EventDispatcher, FailurePolicy, HandlerRegistry, SharedEventDispatcher};
pub use domain_event::{
    DomainEvent, EventHandler, NamedEvent, SharedEventHandler, downcast_event, same_handler,
};
pub use product::{ProductCreatedData, ProductCreatedEvent};
