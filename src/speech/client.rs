//! Speech client.

use std::path::Path;

use reqwest::StatusCode;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

use super::types::{AudioSink, SpeechRequest};
use crate::config::ClientConfig;
use crate::transport::{read_body, HttpTransport};
use crate::{Error, Result};

/// Endpoint path for speech synthesis.
pub const SPEECH_PATH: &str = "/v1/audio/speech";

/// Client for text-to-speech synthesis.
pub struct SpeechClient {
    transport: HttpTransport,
    sink: AudioSink,
}

impl SpeechClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
            sink: AudioSink::default(),
        })
    }

    pub fn with_sink(mut self, sink: AudioSink) -> Self {
        self.sink = sink;
        self
    }

    pub fn sink(&self) -> AudioSink {
        self.sink
    }

    /// Synthesize `text` and target `path` with the result.
    ///
    /// The file is created as soon as the server answers, before the status is
    /// checked, so a non-200 reply still leaves an empty file behind. With
    /// [`AudioSink::CreateOnly`] the body is never read and the file stays
    /// empty on success too.
    pub async fn convert_text_to_speech(&self, text: &str, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let request = SpeechRequest::new(text);
        let body = serde_json::to_vec(&request).map_err(Error::Serialization)?;

        let http_request = self.transport.post_json(SPEECH_PATH, body)?;
        let response = self.transport.execute(http_request).await?;

        let mut file = File::create(path).await.map_err(|source| Error::FileCreate {
            path: path.to_path_buf(),
            source,
        })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = status.as_u16(), path = %path.display(), "speech request rejected");
            return Err(Error::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        match self.sink {
            AudioSink::CreateOnly => {
                info!(path = %path.display(), "speech file created");
            }
            AudioSink::WriteBody => {
                let audio = read_body(response).await?;
                let written = match file.write_all(&audio).await {
                    Ok(()) => file.flush().await,
                    Err(e) => Err(e),
                };
                written.map_err(|source| Error::FileWrite {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!(path = %path.display(), bytes = audio.len(), "speech audio written");
            }
        }

        Ok(())
    }
}
