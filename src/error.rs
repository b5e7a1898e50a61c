//! Error types for Exoframe
//!
//! Uses `thiserror` for library errors. Binary glue wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Exoframe operations
pub type ExoResult<T> = Result<T, ExoError>;

/// Main error type for Exoframe operations
#[derive(Error, Debug)]
pub enum ExoError {
    /// Config file exists but could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Prompt backend failed (no terminal, interrupted, ...)
    #[error("prompt failed: {0}")]
    Prompt(String),

    /// Prompt kind is not one the prompt backend understands
    #[error("unsupported prompt kind '{0}' (expected 'input' or 'select')")]
    UnsupportedPromptKind(String),

    /// Image listing failed
    #[error("could not list images")]
    ImageListing(#[source] TransportError),

    /// Server returned no images to choose from
    #[error("no images available to deploy")]
    NoImages,
}

/// Failure talking to the server
#[derive(Error, Debug)]
pub enum TransportError {
    /// Server answered with a non-2xx status
    #[error("server responded with {status}: {body}")]
    Status { status: u16, body: String },

    /// Request never produced a response (connect, timeout, ...)
    #[error("request failed: {0}")]
    Request(String),

    /// Response body was not the expected JSON
    #[error("could not decode response: {0}")]
    Decode(String),
}

impl TransportError {
    /// HTTP status code, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Deployment failed after the request was built
#[derive(Error, Debug)]
pub enum DeployError {
    /// Server accepted the request but reported no containers
    #[error("Error deploying!")]
    EmptyResult,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl DeployError {
    /// HTTP status code behind this failure, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            DeployError::Transport(err) => err.status(),
            DeployError::EmptyResult => None,
        }
    }
}
