//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;
use crate::infrastructure::xml::XmlError;

/// Application errors wrap domain errors and add application-level context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Navigation(#[from] DomainError),

    #[error("error in argument: {token}")]
    Usage { token: String },

    #[error("file open error: {}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: XmlError,
    },

    #[error("serialization failed: {0}")]
    Serialization(#[from] XmlError),

    #[error("writing {}: {source}", path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write output: {0}")]
    Output(#[source] std::io::Error),

    #[error("config error: {message}")]
    Config { message: String },
}

impl ApplicationError {
    /// Navigation failures print their own diagnostic while the chain runs.
    pub fn is_reported(&self) -> bool {
        matches!(self, ApplicationError::Navigation(_))
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
