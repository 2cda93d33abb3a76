//! Configuration management
//!
//! TOML configuration merged with defaults and environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{AppConfig, DispatcherConfig, LoggingConfig};
