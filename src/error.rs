//! Error types for ollama-chat.

use thiserror::Error;

/// Failure while enumerating locally installed models.
///
/// Terminal for a single invocation: callers surface it and abort the flow
/// rather than retrying.
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("ollama binary not found on PATH; ensure Ollama is installed and running")]
    NotInstalled,

    #[error("failed to run `ollama list`: {0}; ensure Ollama is installed and running")]
    Io(#[from] std::io::Error),

    #[error("`ollama list` exited with {status}: {stderr}")]
    CommandFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },
}

/// Failure during one chat request/response cycle.
///
/// Does not abort the conversation: the caller may surface the message in
/// place of assistant text and the session stays usable for a retry.
#[derive(Error, Debug)]
pub enum QueryError {
    /// The local endpoint did not accept the connection.
    #[error("could not connect to Ollama at {endpoint}; ensure the Ollama daemon is running")]
    ConnectionRefused { endpoint: String },

    /// Any other transport or server-side failure, message carried verbatim.
    #[error("{0}")]
    Other(String),
}

impl QueryError {
    /// Map a transport error, naming the endpoint when the connection itself
    /// was refused.
    pub(crate) fn from_transport(err: reqwest::Error, endpoint: &str) -> Self {
        if err.is_connect() {
            Self::ConnectionRefused {
                endpoint: endpoint.to_string(),
            }
        } else {
            Self::Other(err.to_string())
        }
    }
}
