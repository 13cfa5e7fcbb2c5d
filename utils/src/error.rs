use std::io;
use std::path::PathBuf;
use std::sync::PoisonError;

use thiserror::Error;

/// Result type alias shared across the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Generic error described by a message.
    #[error("{0}")]
    Message(String),

    /// A required environment variable is missing or empty.
    #[error("Environment variable {0} is not set")]
    Environment(String),

    /// Directory creation or configuration copy failed.
    #[error("Filesystem error at {}: {source}", path.display())]
    Filesystem {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The daemon binary could not replace the current process image.
    #[error("Failed to exec {binary}: {source}")]
    Exec {
        binary: String,
        #[source]
        source: io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Logger error: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl Error {
    /// Create an error from a plain message.
    pub fn new(msg: &str) -> Self {
        Error::Message(msg.into())
    }
}

impl<T> From<PoisonError<T>> for Error {
    fn from(_: PoisonError<T>) -> Self {
        Error::new("Configuration lock poisoned")
    }
}
