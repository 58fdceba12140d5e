//! Common imports.

pub use crate::config::OllamaConfig;
pub use crate::error::{LookupError, QueryError};
pub use crate::lookup::{is_available, is_installed, list_models};
pub use crate::provider::{ChatProvider, OllamaProvider};
pub use crate::session::ChatSession;
pub use crate::types::{Role, Transcript, Turn};
