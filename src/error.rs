// ABOUTME: Application-wide error types for deploy-tracker.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::github::ApiError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Input required and not supplied: {0}")]
    MissingInput(&'static str),

    #[error("missing required environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("invalid value for {name}: {reason}")]
    InvalidValue { name: &'static str, reason: String },

    #[error("Failed to create deployment: Invalid response")]
    MalformedResponse { message: Option<String> },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("unable to write {name} through {command}: {reason}")]
    FileCommand {
        command: &'static str,
        name: String,
        reason: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_value(name: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidValue {
            name,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
