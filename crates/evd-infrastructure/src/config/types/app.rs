//! Main application configuration

use super::{DispatcherConfig, LoggingConfig};
use serde::{Deserialize, Serialize};

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub logging: LoggingConfig,
    /// Event dispatcher configuration
    pub dispatcher: DispatcherConfig,
}
