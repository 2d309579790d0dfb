//! Speech synthesis types.

use serde::Serialize;

pub const DEFAULT_MODEL: &str = "tts-1";
pub const DEFAULT_VOICE: &str = "onyx";
pub const DEFAULT_SPEED: f32 = 1.0;

/// Request body for speech synthesis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeechRequest {
    model: String,
    input: String,
    voice: String,
    speed: f32,
}

impl SpeechRequest {
    /// Fixed model, voice and speed around the caller's text.
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            input: input.into(),
            voice: DEFAULT_VOICE.to_string(),
            speed: DEFAULT_SPEED,
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }
}

/// What happens to the destination file after a successful response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AudioSink {
    /// Create (or truncate) the file and leave it empty.
    #[default]
    CreateOnly,
    /// Read the whole response body and write it to the file.
    WriteBody,
}
