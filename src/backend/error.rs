use thiserror::Error;

/// Errors raised by the backend collaborator, read or write.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BackendError {
    #[error("{message}")]
    Api { status: u16, message: String },
    #[error("Request failed: {0}")]
    Transport(String),
    #[error("Unexpected response: {0}")]
    Decode(String),
    #[error("Service communication error: {0}")]
    ServiceCommunicationError(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}
