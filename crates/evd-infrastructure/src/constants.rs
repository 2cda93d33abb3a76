//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "evd.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "evd";

/// Environment variable prefix for configuration
pub const CONFIG_ENV_PREFIX: &str = "EVD";

/// Separator between nested keys in environment variables
/// (`EVD_DISPATCHER__FAILURE_POLICY` sets `dispatcher.failure_policy`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the configured log filter
pub const LOG_FILTER_ENV: &str = "EVD_LOG";

/// File stem used when the configured log path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "evd";
