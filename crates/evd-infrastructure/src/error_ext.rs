//! Error extension utilities
//!
//! Converts foreign errors met while loading or saving configuration into
//! domain errors, keeping the original as the source.

use evd_domain::error::{Error, Result};
use std::fmt;

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```ignore
/// use evd_infrastructure::error_ext::ErrorContext;
///
/// std::fs::write(&path, contents).io_context("Failed to write config file")?;
/// ```
pub trait ErrorContext<T> {
    /// Wrap the error as [`Error::Io`]
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;

    /// Wrap the error as [`Error::Configuration`]
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| Error::Io {
            message: format!("{context}: {err}"),
            source: Some(Box::new(err)),
        })
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
