//! Dispatcher configuration types

use evd_domain::events::FailurePolicy;
use serde::{Deserialize, Serialize};

/// Event dispatcher configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DispatcherConfig {
    /// What `notify` does when a handler fails (`fail_fast` or `isolate`)
    pub failure_policy: FailurePolicy,
}

impl DispatcherConfig {
    /// Config stopping at the first failing handler (default)
    pub fn fail_fast() -> Self {
        Self::default()
    }

    /// Config running every handler and reporting all failures
    pub fn isolate() -> Self {
        Self {
            failure_policy: FailurePolicy::Isolate,
        }
    }
}
