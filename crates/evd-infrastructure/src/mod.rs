//! # Infrastructure Layer
//!
//! Technical concerns behind the domain contracts.
//!
//! ## Module Categories
//!
//! ### Dispatch
//! | Module | Description |
//! |--------|-------------|
//! | [`dispatcher`] | In-process, synchronous event dispatcher |
//! | [`handlers`] | Built-in reactions to product and customer events |
//!
//! ### Configuration & Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML configuration merged with environment variables |
//! | [`constants`] | Centralized configuration constants |
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context helpers converting errors to domain errors |

pub mod config;
pub mod constants;
pub mod dispatcher;
pub mod error_ext;
pub mod handlers;
pub mod logging;

// Re-export commonly used types
pub use config::{AppConfig, ConfigLoader};
pub use dispatcher::InProcessEventDispatcher;
pub use error_ext::ErrorContext;
pub use handlers::register_default_handlers;
