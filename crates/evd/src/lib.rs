//! # Event Dispatcher
//!
//! An in-process domain event dispatcher. State-changing operations raise
//! events; handlers registered under the event's name react to them,
//! synchronously and in registration order.
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use evd::domain::events::{
//!     EventDispatcher, NamedEvent, ProductCreatedData, ProductCreatedEvent,
//! };
//! use evd::infrastructure::InProcessEventDispatcher;
//! use evd::infrastructure::handlers::SendEmailWhenProductIsCreatedHandler;
//!
//! let dispatcher = InProcessEventDispatcher::new();
//! dispatcher.register(
//!     ProductCreatedEvent::NAME,
//!     Arc::new(SendEmailWhenProductIsCreatedHandler),
//! );
//!
//! let event = ProductCreatedEvent::new(ProductCreatedData {
//!     name: "Product 1".to_string(),
//!     description: "Product 1 description".to_string(),
//!     price: 10.0,
//! });
//! dispatcher.notify(&event).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Event, handler and dispatcher contracts, concrete events, errors
//! - `infrastructure` - In-process dispatcher, handlers, config, logging

use std::sync::Arc;

/// Domain layer - contracts and events
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use evd_domain::*;
}

/// Infrastructure layer - dispatcher, handlers, config and logging
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use evd_infrastructure::*;
}

// Re-export commonly used domain types at the crate root
pub use domain::events::{DomainEvent, EventDispatcher, EventHandler, SharedEventDispatcher};
pub use domain::{Error, Result};

/// Build the application's dispatcher with the built-in handlers wired in
///
/// This is the composition root: one dispatcher per call, no global state.
pub fn bootstrap(config: &infrastructure::AppConfig) -> SharedEventDispatcher {
    let dispatcher = Arc::new(infrastructure::InProcessEventDispatcher::from_config(
        &config.dispatcher,
    ));
    infrastructure::register_default_handlers(dispatcher.as_ref());
    dispatcher
}
