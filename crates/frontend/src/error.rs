//! Client-side errors.

use thiserror::Error;

/// Failure talking to the backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection, timeout or body decoding failure
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("Failed to fetch {path}: HTTP {status}")]
    Status { path: String, status: u16 },
}

impl ClientError {
    /// Create a status error
    pub fn status(path: impl Into<String>, status: u16) -> Self {
        ClientError::Status {
            path: path.into(),
            status,
        }
    }
}

/// Result type alias
pub type ClientResult<T> = Result<T, ClientError>;
