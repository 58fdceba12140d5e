//! Chat transport seam and the Ollama HTTP implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::OllamaConfig;
use crate::error::QueryError;
use crate::http::shared_client;
use crate::types::{Role, Turn};

/// Transport a session uses for one request/response cycle.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Endpoint name used in connection-failure messages.
    fn endpoint(&self) -> &str;

    /// Send the full ordered turn list for `model`, returning the assistant
    /// text. The complete reply comes back in one payload; streaming is
    /// always disabled.
    async fn chat(&self, model: &str, turns: &[Turn]) -> Result<String, QueryError>;
}

/// Wire shape of one chat message; turn timestamps never leave the client.
#[derive(Serialize)]
struct WireMessage<'a> {
    role: Role,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: String,
}

/// Talks to the Ollama daemon's `/api/chat` endpoint.
pub struct OllamaProvider {
    base_url: String,
}

impl OllamaProvider {
    pub fn new(config: &OllamaConfig) -> Self {
        Self {
            base_url: config.base_url().to_string(),
        }
    }

    fn build_request_body(&self, model: &str, turns: &[Turn]) -> serde_json::Value {
        let messages: Vec<WireMessage> = turns
            .iter()
            .map(|t| WireMessage {
                role: t.role,
                content: &t.content,
            })
            .collect();

        serde_json::json!({
            "model": model,
            "messages": messages,
            "stream": false,
        })
    }
}

#[async_trait]
impl ChatProvider for OllamaProvider {
    fn endpoint(&self) -> &str {
        &self.base_url
    }

    async fn chat(&self, model: &str, turns: &[Turn]) -> Result<String, QueryError> {
        let body = self.build_request_body(model, turns);
        let url = format!("{}/api/chat", self.base_url);

        debug!(model, turn_count = turns.len(), "ollama chat request");

        let resp = shared_client()
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| QueryError::from_transport(e, &self.base_url))?;

        let status = resp.status();
        if !status.is_success() {
            let body_text = resp.text().await.unwrap_or_default();
            return Err(QueryError::Other(format!(
                "Ollama returned {status}: {body_text}"
            )));
        }

        let data: ChatResponse = resp
            .json()
            .await
            .map_err(|e| QueryError::from_transport(e, &self.base_url))?;

        Ok(data.message.content)
    }
}
