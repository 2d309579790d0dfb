//! Model listing: `GET /v1/models`.

mod client;
mod types;

pub use client::{ModelsClient, MODELS_PATH};
pub use types::{ModelDescriptor, ModelList};
