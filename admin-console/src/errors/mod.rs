//! Error types for the admin console front end.

use admin_console_repository::RepositoryError;
use thiserror::Error;

/// Errors that can occur while configuring or running the console.
#[derive(Error, Debug)]
pub enum ConsoleError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error from the repository layer.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Terminal read or write failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An interactive prompt could not be shown or answered.
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// The command line could not be used as given.
    #[error("{0}")]
    Usage(String),
}

impl ConsoleError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    /// Create a usage error.
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }
}

impl From<dialoguer::Error> for ConsoleError {
    fn from(err: dialoguer::Error) -> Self {
        Self::Prompt(err.to_string())
    }
}

impl From<clap::Error> for ConsoleError {
    fn from(err: clap::Error) -> Self {
        Self::Usage(err.render().to_string())
    }
}
