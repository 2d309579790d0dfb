//! # oai-speech
//!
//! A small client for two OpenAI endpoints:
//!
//! - `GET /v1/models` through [`models::ModelsClient`]
//! - `POST /v1/audio/speech` through [`speech::SpeechClient`]
//!
//! Each call is a single request/response with no retries. Errors come back as
//! [`Error`] values naming the step that failed.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use oai_speech::{ClientConfig, ModelsClient};
//!
//! #[tokio::main]
//! async fn main() -> oai_speech::Result<()> {
//!     let client = ModelsClient::new(ClientConfig::from_env()?)?;
//!     for model in client.list_models(&mut std::io::stdout()).await? {
//!         println!("{model}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | API key, base URL and timeout |
//! | [`transport`] | Authenticated request building and sending |
//! | [`models`] | Model listing |
//! | [`speech`] | Text-to-speech into a file |
//! | [`cli`] | Entry point glue used by the `oai-speech` binary |

pub mod cli;
pub mod config;
pub mod models;
pub mod speech;
pub mod transport;

// Re-export main types for convenience
pub use config::{ApiKey, ClientConfig, ClientConfigBuilder};
pub use models::{ModelDescriptor, ModelsClient};
pub use speech::{AudioSink, SpeechClient, SpeechRequest};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
