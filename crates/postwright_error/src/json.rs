//! JSON error types.

use crate::Location;

/// A post or result could not be parsed from or rendered to JSON.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error: {message} at {location}")]
pub struct JsonError {
    /// Parser or serializer message
    pub message: String,
    /// Where the error was raised
    pub location: Location,
}

impl JsonError {
    /// Create a new JsonError at the current location.
    ///
    /// ```
    /// use postwright_error::JsonError;
    ///
    /// let err = JsonError::new("missing field `content`");
    /// assert!(err.to_string().contains("missing field"));
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: Location::caller(),
        }
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for JsonError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        JsonError::new(err.to_string())
    }
}
