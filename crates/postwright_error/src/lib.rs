//! Error types for the Postwright toolkit.
//!
//! The validation core itself never fails: rule violations are reported in a
//! `ValidationResult`. The types here cover the I/O around it, such as loading
//! configuration or reading generated posts from disk.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod io;
mod json;
mod location;

pub use config::ConfigError;
pub use io::IoError;
pub use json::JsonError;
pub use location::Location;

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum PostwrightErrorKind {
    /// Configuration loading or parsing error
    #[display("{_0}")]
    Config(ConfigError),
    /// JSON serialization/deserialization error
    #[display("{_0}")]
    Json(JsonError),
    /// File system error
    #[display("{_0}")]
    Io(IoError),
}

/// Postwright error with kind discrimination.
#[derive(Debug)]
pub struct PostwrightError(Box<PostwrightErrorKind>);

impl PostwrightError {
    /// Create a new error from a kind.
    pub fn new(kind: PostwrightErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &PostwrightErrorKind {
        &self.0
    }
}

impl std::fmt::Display for PostwrightError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Postwright Error: {}", self.0)
    }
}

impl std::error::Error for PostwrightError {}

// Generic From implementation for any type that converts to PostwrightErrorKind
impl<T> From<T> for PostwrightError
where
    T: Into<PostwrightErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Postwright operations.
pub type PostwrightResult<T> = std::result::Result<T, PostwrightError>;
