//! Error types and definitions for barrelgen
//!
//! Every failure a barrel run can hit maps onto one `BarrelError` variant.
//! Variants carry a severity so callers can decide whether a failure ends the
//! current path, the whole invocation, or nothing at all.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Error severity levels for different error types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Warning level errors - operation can continue
    Warning,
    /// Error level - current path fails but the remaining paths are processed
    Error,
    /// Critical level - process should terminate
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorSeverity::Warning => write!(f, "WARNING"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Main error type for barrelgen operations
#[derive(Debug, Error)]
pub enum BarrelError {
    /// Standard IO errors
    #[error("IO error: {source}")]
    Io {
        #[source]
        source: std::io::Error,
    },

    /// The scan root could not be listed
    #[error("Cannot read directory {path}: {source}")]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A child directory of the scan root could not be listed
    #[error("Cannot read subdirectory {path}: {source}")]
    SubdirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A candidate module could not be read
    #[error("Cannot read file {path}: {source}")]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output subdirectory could not be created
    #[error("Cannot create output directory {path}: {source}")]
    OutputDirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Barrel file write errors
    #[error("Error writing to output file {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Stdout write errors
    #[error("Error writing to stdout: {source}")]
    StdoutWrite {
        #[source]
        source: std::io::Error,
    },

    /// No directory was given on the command line
    #[error("No paths given")]
    NoPaths,

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Configuration file not found
    #[error("Configuration file not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file read errors
    #[error("Error reading configuration file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file parse errors
    #[error("Error parsing configuration file {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// JSON serialization error
    #[error("JSON serialization error: {source}")]
    JsonSerialize {
        #[source]
        source: serde_json::Error,
    },

    /// Errors wrapped with a context message
    #[error("{message}")]
    Context { message: String },
}

impl BarrelError {
    /// Get the severity level of this error
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // Warning level errors - the walk skips the entry and continues
            BarrelError::SubdirectoryUnreadable { .. } => ErrorSeverity::Warning,
            BarrelError::FileUnreadable { .. } => ErrorSeverity::Warning,

            // Critical errors - process should terminate
            BarrelError::Config { .. } => ErrorSeverity::Critical,
            BarrelError::ConfigNotFound { .. } => ErrorSeverity::Critical,
            BarrelError::ConfigRead { .. } => ErrorSeverity::Critical,
            BarrelError::ConfigParse { .. } => ErrorSeverity::Critical,
            BarrelError::StdoutWrite { .. } => ErrorSeverity::Critical,

            // Regular errors - current path fails but the next one is processed
            _ => ErrorSeverity::Error,
        }
    }

    /// Check if this is a critical error that should terminate the process
    pub fn is_critical(&self) -> bool {
        self.severity() == ErrorSeverity::Critical
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            BarrelError::RootUnreadable { path, source } => {
                format!("Cannot scan '{}': {}. No barrel file was generated for this path.", path.display(), source)
            }
            BarrelError::SubdirectoryUnreadable { path, source } => {
                format!("Skipping subdirectory '{}': {}.", path.display(), source)
            }
            BarrelError::FileUnreadable { path, source } => {
                format!("Skipping '{}': {}.", path.display(), source)
            }
            BarrelError::OutputDirectoryCreate { path, source } => {
                format!("Cannot create output directory '{}': {}. Check directory permissions.", path.display(), source)
            }
            BarrelError::OutputWrite { path, source } => {
                format!("Cannot write barrel file '{}': {}. Check disk space and permissions.", path.display(), source)
            }
            BarrelError::Io { source } => {
                format!("File system error: {}. Check disk space and permissions.", source)
            }
            BarrelError::NoPaths => {
                "No paths given. Pass at least one directory to scan.".to_string()
            }
            BarrelError::ConfigNotFound { path } => {
                format!("Configuration file not found at '{}'. Create it with --init or remove the --config option.", path.display())
            }
            // For other errors, use the standard Display implementation
            _ => self.to_string(),
        }
    }

    /// Create an IO error
    pub fn io_error(source: std::io::Error) -> Self {
        BarrelError::Io { source }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        BarrelError::Config {
            message: message.into(),
        }
    }

    /// Create a root listing error
    pub fn root_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BarrelError::RootUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a subdirectory listing error
    pub fn subdirectory_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BarrelError::SubdirectoryUnreadable {
            path: path.into(),
            source,
        }
    }

    /// Create a file read error
    pub fn file_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BarrelError::FileUnreadable {
            path: path.into(),
            source,
        }
    }
}

// Implement From for common error types
impl From<std::io::Error> for BarrelError {
    fn from(err: std::io::Error) -> Self {
        BarrelError::io_error(err)
    }
}

impl From<serde_json::Error> for BarrelError {
    fn from(err: serde_json::Error) -> Self {
        BarrelError::JsonSerialize { source: err }
    }
}

/// Result type alias for barrelgen operations
pub type Result<T> = std::result::Result<T, BarrelError>;
