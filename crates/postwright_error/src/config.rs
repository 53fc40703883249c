//! Configuration error types.

use crate::Location;

/// A configuration file or environment override could not be used.
///
/// # Examples
///
/// ```
/// use postwright_error::ConfigError;
///
/// let err = ConfigError::new("default_platform 'myspace' is not supported");
/// assert!(err.to_string().starts_with("Configuration Error: default_platform"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {message} at {location}")]
pub struct ConfigError {
    /// What was wrong
    pub message: String,
    /// Where the error was raised
    pub location: Location,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }
}

#[cfg(feature = "config")]
impl From<::config::ConfigError> for ConfigError {
    #[track_caller]
    fn from(err: ::config::ConfigError) -> Self {
        ConfigError::new(err.to_string())
    }
}
