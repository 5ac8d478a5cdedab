//! Error handling for barrelgen
//!
//! This module provides the error types, result alias, and error context
//! utilities shared by the walker, the writer and the CLI.

pub mod context;
pub mod types;

pub use context::{handle_error, ResultExt};
pub use types::{BarrelError, ErrorSeverity, Result};
