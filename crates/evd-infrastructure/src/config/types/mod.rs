//! Configuration types module

pub mod app;
pub mod dispatcher;
pub mod logging;

pub use app::AppConfig;
pub use dispatcher::DispatcherConfig;
pub use logging::LoggingConfig;
