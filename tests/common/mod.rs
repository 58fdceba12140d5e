//! Shared test helpers and mock chat provider.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use ollama_chat::error::QueryError;
use ollama_chat::provider::ChatProvider;
use ollama_chat::types::Turn;

/// Canned transport that records every request it sees.
///
/// Clone it (cheap, shared state) to keep a handle after the session takes
/// ownership of the boxed copy.
#[derive(Clone)]
pub struct MockProvider {
    inner: Arc<Inner>,
}

struct Inner {
    replies: Mutex<Vec<Result<String, QueryError>>>,
    requests: Mutex<Vec<Vec<Turn>>>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Inner {
                replies: Mutex::new(Vec::new()),
                requests: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Queue a successful reply (served in queue order).
    pub fn queue_reply(&self, text: &str) {
        self.inner
            .replies
            .lock()
            .unwrap()
            .push(Ok(text.to_string()));
    }

    /// Queue a failure.
    pub fn queue_error(&self, err: QueryError) {
        self.inner.replies.lock().unwrap().push(Err(err));
    }

    /// Turn lists of every request seen so far, in call order.
    pub fn requests(&self) -> Vec<Vec<Turn>> {
        self.inner.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockProvider {
    fn endpoint(&self) -> &str {
        "mock://local"
    }

    async fn chat(&self, _model: &str, turns: &[Turn]) -> Result<String, QueryError> {
        self.inner.requests.lock().unwrap().push(turns.to_vec());
        let mut replies = self.inner.replies.lock().unwrap();
        if replies.is_empty() {
            Ok("canned reply".to_string())
        } else {
            replies.remove(0)
        }
    }
}
