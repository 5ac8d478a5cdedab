//! Error context utilities for barrelgen
//!
//! Helpers for adding context to foreign errors and for reporting errors
//! in a consistent way on the console.

use crate::error::types::ErrorSeverity;
use crate::error::{BarrelError, Result};

/// Extension trait for Result to add context to errors
pub trait ResultExt<T, E> {
    /// Add context to an error with a custom message
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display;
}

impl<T, E> ResultExt<T, E> for std::result::Result<T, E>
where
    E: std::error::Error + 'static,
{
    fn with_context<C, F>(self, context: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: std::fmt::Display,
    {
        self.map_err(|err| BarrelError::Context {
            message: format!("{}: {}", context(), err),
        })
    }
}

/// Handle an error based on its severity
///
/// - Warning: Log the error and return None
/// - Error: Log the error and return None
/// - Critical: Log the error and return Some(error)
pub fn handle_error(err: BarrelError) -> Option<BarrelError> {
    let message = err.user_message();

    match err.severity() {
        ErrorSeverity::Warning => {
            eprintln!("Warning: {}", message);
            None
        }
        ErrorSeverity::Error => {
            eprintln!("Error: {}", message);
            None
        }
        ErrorSeverity::Critical => {
            eprintln!("Critical Error: {}", message);
            Some(err)
        }
    }
}
