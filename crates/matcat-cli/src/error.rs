//! Error types for matcat-cli

use thiserror::Error;

/// Result type alias for matcat-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in matcat-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from matcat-core (parsing, I/O, export)
    #[error(transparent)]
    Core(#[from] matcat_core::Error),

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A queried script name is not listed in the catalog
    #[error("{name} is not listed in the catalog")]
    NotListed {
        /// The name that was looked up
        name: String,
    },
}

impl Error {
    /// Creates a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }
}
