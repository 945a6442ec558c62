//! Error extension utilities
//!
//! Context methods mapping foreign errors into the domain error.

use std::fmt;

use ioc_domain::error::{Error, Result};

/// Extension trait for adding context to errors
///
/// # Example
///
/// ```
/// use ioc_infrastructure::error_ext::ErrorContext;
///
/// let read = std::fs::read_to_string("/definitely/not/here.toml")
///     .io_context("Failed to read config file");
/// assert!(read.is_err());
/// ```
pub trait ErrorContext<T> {
    /// Add context for I/O operations
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;

    /// Add context for configuration operations
    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn io_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::io_with_source(format!("{context}: {err}"), err))
    }

    fn config_context<C>(self, context: C) -> Result<T>
    where
        C: fmt::Display + Send + Sync + 'static,
    {
        self.map_err(|err| Error::configuration_with_source(format!("{context}: {err}"), err))
    }
}
