//! Endpoint configuration (layered: explicit > env > default).

/// Default local endpoint of the Ollama daemon.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

const DEFAULT_LIST_BINARY: &str = "ollama";

/// Where to find the local runtime.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    base_url: String,
    list_binary: String,
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            list_binary: DEFAULT_LIST_BINARY.to_string(),
        }
    }
}

impl OllamaConfig {
    /// Config pointing at the default local endpoint.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from the environment (`OLLAMA_HOST`), reading `.env` if present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv(); // load .env if present, ignore error
        let mut config = Self::new();
        if let Ok(host) = std::env::var("OLLAMA_HOST") {
            if !host.is_empty() {
                config.base_url = host;
            }
        }
        config
    }

    /// Override the chat endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the listing binary (mainly for tests).
    pub fn with_list_binary(mut self, binary: impl Into<String>) -> Self {
        self.list_binary = binary.into();
        self
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    pub fn list_binary(&self) -> &str {
        &self.list_binary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_daemon() {
        let config = OllamaConfig::new();
        assert_eq!(config.base_url(), "http://localhost:11434");
        assert_eq!(config.list_binary(), "ollama");
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let config = OllamaConfig::new().with_base_url("http://127.0.0.1:9999/");
        assert_eq!(config.base_url(), "http://127.0.0.1:9999");
    }
}
