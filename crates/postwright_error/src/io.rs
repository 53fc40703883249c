//! File system error types.

use crate::Location;
use std::path::Path;

/// A file could not be read.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("I/O Error: {message} ({path}) at {location}")]
pub struct IoError {
    /// Path being read
    pub path: String,
    /// Operating system message
    pub message: String,
    /// Where the error was raised
    pub location: Location,
}

impl IoError {
    /// Create a new IoError for `path` at the current location.
    #[track_caller]
    pub fn new(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self {
            path: path.as_ref().display().to_string(),
            message: message.into(),
            location: Location::caller(),
        }
    }
}
