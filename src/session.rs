//! Conversation session: one model bound to one append-only transcript.

use tracing::{debug, warn};

use crate::config::OllamaConfig;
use crate::error::QueryError;
use crate::provider::{ChatProvider, OllamaProvider};
use crate::types::{Transcript, Turn};

/// Binds one selected model to one transcript for the lifetime of a chat.
///
/// Every request carries the entire transcript, so the server holds no
/// session state. `send` takes `&mut self`, which keeps a session to at most
/// one in-flight request; two sessions are fully independent.
pub struct ChatSession {
    model: String,
    transcript: Transcript,
    provider: Box<dyn ChatProvider>,
}

impl ChatSession {
    /// Create a session against the endpoint resolved from the environment.
    pub fn new(model: impl Into<String>) -> Self {
        Self::with_config(model, &OllamaConfig::from_env())
    }

    /// Create a session against a specific endpoint configuration.
    pub fn with_config(model: impl Into<String>, config: &OllamaConfig) -> Self {
        Self::with_provider(model, Box::new(OllamaProvider::new(config)))
    }

    /// Create a session over an arbitrary transport.
    pub fn with_provider(model: impl Into<String>, provider: Box<dyn ChatProvider>) -> Self {
        Self {
            model: model.into(),
            transcript: Transcript::new(),
            provider,
        }
    }

    /// The bound model identifier.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Read-only view of the conversation history.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Send one user message and return the assistant's reply.
    ///
    /// The user turn is appended before the request goes out and is kept even
    /// when the request fails, so the transcript still shows what was asked.
    /// Empty or whitespace-only input is treated as a normal turn; filtering
    /// is the caller's concern.
    pub async fn send(&mut self, user_text: impl Into<String>) -> Result<String, QueryError> {
        self.transcript.push(Turn::user(user_text));

        match self
            .provider
            .chat(&self.model, self.transcript.turns())
            .await
        {
            Ok(reply) => {
                self.transcript.push(Turn::assistant(reply.clone()));
                Ok(reply)
            }
            Err(err) => {
                warn!(model = %self.model, %err, "chat request failed");
                Err(err)
            }
        }
    }

    /// Clear the transcript. A no-op when it is already empty.
    pub fn reset(&mut self) {
        debug!(model = %self.model, turns = self.transcript.len(), "resetting transcript");
        self.transcript.clear();
    }
}
