//! Output writing functionality
//!
//! This module provides writers for different output destinations.

use crate::error::{BarrelError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Trait for output writers
pub trait OutputWriter {
    /// Write content to the output destination
    fn write(&self, content: &str) -> Result<()>;
}

/// Writer for stdout output
#[derive(Debug)]
pub struct StdoutWriter;

impl OutputWriter for StdoutWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut stdout = io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
            .map_err(|e| BarrelError::StdoutWrite { source: e })
    }
}

/// Writer for file output, truncating any previous content
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    /// Create a new file writer
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl OutputWriter for FileWriter {
    fn write(&self, content: &str) -> Result<()> {
        let mut file = File::create(&self.path).map_err(|e| BarrelError::OutputWrite {
            path: self.path.clone(),
            source: e,
        })?;

        file.write_all(content.as_bytes())
            .map_err(|e| BarrelError::OutputWrite {
                path: self.path.clone(),
                source: e,
            })
    }
}
