//! Errors raised by a single request to the API server.

use thiserror::Error;

/// Why a request failed. Every variant is terminal for that attempt: callers
/// log it and move on, nothing is retried.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The server answered with something other than the expected status.
    #[error("Something went wrong on api server! (status {status})")]
    Server { status: u16 },

    /// The request could not complete (connectivity, CORS, aborted).
    #[error("Request failed: {0}")]
    Transport(String),

    /// The server answered 200 but the body was not the expected envelope.
    #[error("Malformed response body: {0}")]
    Decode(String),

    /// The endpoint could not be resolved against the page origin.
    #[error("Invalid endpoint: {0}")]
    Config(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Transport(err.to_string())
        }
    }
}
