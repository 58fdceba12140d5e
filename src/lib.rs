//! ollama-chat — chat with a locally running Ollama runtime.
//!
//! Enumerates locally installed models, binds a selected model to an
//! append-only transcript, and mediates each request/response cycle with the
//! runtime's HTTP chat endpoint. Every request carries the entire transcript,
//! so the server holds no session state and a conversation is reproducible
//! from the client-held transcript alone.
//!
//! # Quick Start
//!
//! ```no_run
//! use ollama_chat::prelude::*;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let models = list_models().await?;
//! let mut session = ChatSession::new(models[0].clone());
//! let reply = session.send("Hello!").await?;
//! println!("{reply}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod lookup;
pub mod prelude;
pub mod provider;
pub mod session;
pub mod types;

mod http;

pub use session::ChatSession;
