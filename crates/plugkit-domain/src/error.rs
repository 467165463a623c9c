//! Error handling types

use thiserror::Error;

/// Result type alias for operations that can fail
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for plugkit
///
/// Every failure in this workspace is terminal for the enclosing
/// registration call: nothing catches, retries, or rolls back.
#[derive(Error, Debug)]
pub enum Error {
    /// A configurator's command name could not be resolved to a live
    /// command in the host's command table
    #[error("Command not found: {name}")]
    CommandNotFound {
        /// The command name that could not be found
        name: String,
    },

    /// An operation was invoked on a type that does not support it,
    /// e.g. registry-based name resolution for a type with no bound name
    #[error("Unsupported operation: {message}")]
    UnsupportedOperation {
        /// Description of the unsupported operation
        message: String,
    },

    /// Error raised by the host's own subscription or lookup machinery,
    /// passed through unmodified by the wiring layer
    #[error("Host error: {message}")]
    Host {
        /// Description of the host error
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Create a command-not-found error
    pub fn command_not_found<S: Into<String>>(name: S) -> Self {
        Self::CommandNotFound { name: name.into() }
    }

    /// Create an unsupported-operation error
    pub fn unsupported_operation<S: Into<String>>(message: S) -> Self {
        Self::UnsupportedOperation {
            message: message.into(),
        }
    }

    /// Create a host error
    pub fn host<S: Into<String>>(message: S) -> Self {
        Self::Host {
            message: message.into(),
            source: None,
        }
    }

    /// Create a host error with source
    pub fn host_with_source<S: Into<String>, E: std::error::Error + Send + Sync + 'static>(
        message: S,
        source: E,
    ) -> Self {
        Self::Host {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The unresolved command name, when this is a [`Error::CommandNotFound`]
    pub fn command_name(&self) -> Option<&str> {
        match self {
            Self::CommandNotFound { name } => Some(name),
            _ => None,
        }
    }
}
