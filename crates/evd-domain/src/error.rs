//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error produced by code outside this crate
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Main error type for the event dispatcher
#[derive(Error, Debug)]
pub enum Error {
    /// A handler failed while reacting to an event
    #[error("Handler '{handler}' failed on {event}: {source}")]
    Handler {
        /// Name of the failing handler
        handler: String,
        /// Name of the event being dispatched
        event: String,
        /// What the handler returned
        #[source]
        source: BoxError,
    },

    /// One or more handlers failed while the dispatcher isolated failures
    #[error("{} handler(s) failed on {event}", .failures.len())]
    HandlersFailed {
        /// Name of the event being dispatched
        event: String,
        /// Every failure, in invocation order
        failures: Vec<HandlerFailure>,
    },

    /// A handler received an event of another concrete type
    #[error("Event type mismatch: expected {expected}, got {actual}")]
    EventTypeMismatch {
        /// Event name the handler understands
        expected: &'static str,
        /// Event name actually received
        actual: String,
    },

    /// I/O operation error (with context)
    #[error("I/O error: {message}")]
    Io {
        /// Description of the I/O error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Event payload could not be turned into JSON
    #[error("JSON serialization error: {source}")]
    Json {
        /// The underlying JSON error
        #[from]
        source: serde_json::Error,
    },

    /// Configuration-related error
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration error
        message: String,
        /// Optional source error
        #[source]
        source: Option<BoxError>,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal error
        message: String,
    },
}

/// A single handler failure collected during an isolated dispatch
#[derive(Debug)]
pub struct HandlerFailure {
    /// Name of the failing handler
    pub handler: String,
    /// The error the handler returned
    pub error: Error,
}

impl std::fmt::Display for HandlerFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.handler, self.error)
    }
}

// Dispatch error creation methods
impl Error {
    /// Wrap an error returned by a handler
    pub fn handler<H, E, S>(handler: H, event: E, source: S) -> Self
    where
        H: Into<String>,
        E: Into<String>,
        S: Into<BoxError>,
    {
        Self::Handler {
            handler: handler.into(),
            event: event.into(),
            source: source.into(),
        }
    }

    /// Create an event type mismatch error
    pub fn event_type_mismatch<S: Into<String>>(expected: &'static str, actual: S) -> Self {
        Self::EventTypeMismatch {
            expected,
            actual: actual.into(),
        }
    }

    /// Name of the handler behind a `Handler` error
    pub fn handler_name(&self) -> Option<&str> {
        match self {
            Self::Handler { handler, .. } => Some(handler),
            _ => None,
        }
    }
}

// Configuration error creation methods
impl Error {
    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Create a configuration error with source
    pub fn configuration_with_source<
        S: Into<String>,
        E: std::error::Error + Send + Sync + 'static,
    >(
        message: S,
        source: E,
    ) -> Self {
        Self::Configuration {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

// Internal error creation methods
impl Error {
    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
