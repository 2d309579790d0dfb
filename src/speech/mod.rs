//! Speech synthesis: `POST /v1/audio/speech`.

mod client;
mod types;

pub use client::{SpeechClient, SPEECH_PATH};
pub use types::{AudioSink, SpeechRequest, DEFAULT_MODEL, DEFAULT_SPEED, DEFAULT_VOICE};
