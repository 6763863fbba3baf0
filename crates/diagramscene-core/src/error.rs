//! Error handling for DiagramScene
//!
//! Provides the unified error type used by the library crates. All error
//! types use `thiserror`; the binary wraps them in `anyhow`.

use thiserror::Error;

/// Main error type for DiagramScene
#[derive(Error, Debug)]
pub enum Error {
    /// A component was wired or configured with values it cannot work with.
    ///
    /// Raised at construction time, never per event.
    #[error("Configuration error: {reason}")]
    Configuration {
        /// Why the configuration was rejected.
        reason: String,
    },

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error from a reason
    pub fn configuration(reason: impl Into<String>) -> Self {
        Error::Configuration {
            reason: reason.into(),
        }
    }

    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::Configuration { .. })
    }
}

/// Result type alias for DiagramScene operations
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = Error::configuration("menu label must not be empty");
        assert!(err.is_configuration());
        assert_eq!(
            err.to_string(),
            "Configuration error: menu label must not be empty"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(!err.is_configuration());
        assert!(err.to_string().starts_with("I/O error"));
    }
}
