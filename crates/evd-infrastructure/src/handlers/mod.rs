//! Event handlers reacting to the domain events
//!
//! | Handler | Event |
//! |---------|-------|
//! | [`SendEmailWhenProductIsCreatedHandler`] | `ProductCreatedEvent` |
//! | [`FirstCustomerCreatedLogHandler`] | `CustomerCreatedEvent` |
//! | [`SecondCustomerCreatedLogHandler`] | `CustomerCreatedEvent` |
//! | [`CustomerAddressChangedLogHandler`] | `CustomerAddressChangedEvent` |

pub mod customer;
pub mod product;

pub use customer::{
    CustomerAddressChangedLogHandler, FirstCustomerCreatedLogHandler,
    SecondCustomerCreatedLogHandler,
};
pub use product::SendEmailWhenProductIsCreatedHandler;

use evd_domain::events::{
    CustomerAddressChangedEvent, CustomerCreatedEvent, EventDispatcher, NamedEvent,
    ProductCreatedEvent,
};
use std::sync::Arc;

/// Register every built-in handler under its event name
///
/// Customer-created handlers are registered first, then second, so they
/// log in that order.
pub fn register_default_handlers(dispatcher: &dyn EventDispatcher) {
    dispatcher.register(
        ProductCreatedEvent::NAME,
        Arc::new(SendEmailWhenProductIsCreatedHandler),
    );
    dispatcher.register(
        CustomerCreatedEvent::NAME,
        Arc::new(FirstCustomerCreatedLogHandler),
    );
    dispatcher.register(
        CustomerCreatedEvent::NAME,
        Arc::new(SecondCustomerCreatedLogHandler),
    );
    dispatcher.register(
        CustomerAddressChangedEvent::NAME,
        Arc::new(CustomerAddressChangedLogHandler),
    );
}
