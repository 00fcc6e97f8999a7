//! Development helpers for a local [Ollama](https://ollama.com) server.
//!
//! The crate is a thin layer over one contract: [`Ollama::request`] performs a
//! single buffered HTTP request against the configured server and decodes the
//! response as JSON. Everything else is a direct, sequential consumer of that
//! helper: the connectivity probe, the model listing, the code-assistance and
//! chat helpers, and the `ollama-dev` smoke-test binary.
//!
//! ```no_run
//! use ollama_dev::{Ollama, OllamaConfig};
//!
//! # async fn demo() {
//! let ollama = Ollama::new(OllamaConfig::default().with_model("llama3.2"));
//! if let Some(completion) = ollama.code_completion("fn add(a: i32, b: i32)").await {
//!     println!("{completion}");
//! }
//! # }
//! ```

mod client;
mod config;
mod error;
mod types;

pub use client::Ollama;
pub use config::OllamaConfig;
pub use error::OllamaError;
pub use types::{GenerateOptions, Message, Role};

// Callers of the raw request helper name the verb with this.
pub use reqwest::Method;
