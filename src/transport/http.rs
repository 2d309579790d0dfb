use reqwest::header::CONTENT_TYPE;
use reqwest::{Request, Response};
use tracing::debug;

use crate::config::ClientConfig;
use crate::{Error, Result};

/// Thin wrapper over `reqwest::Client` that knows the base URL and key.
///
/// Request construction, sending and body reads are separate steps so each
/// failure surfaces as its own error variant.
pub struct HttpTransport {
    client: reqwest::Client,
    config: ClientConfig,
}

impl HttpTransport {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build an authenticated `GET` for `path`.
    pub fn get(&self, path: &str) -> Result<Request> {
        let url = self.config.endpoint(path)?;
        self.client
            .get(url)
            .bearer_auth(self.config.api_key.expose())
            .build()
            .map_err(Error::RequestBuild)
    }

    /// Build an authenticated `POST` carrying an already encoded JSON body.
    pub fn post_json(&self, path: &str, body: Vec<u8>) -> Result<Request> {
        let url = self.config.endpoint(path)?;
        self.client
            .post(url)
            .bearer_auth(self.config.api_key.expose())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(Error::RequestBuild)
    }

    pub async fn execute(&self, request: Request) -> Result<Response> {
        debug!(method = %request.method(), url = %request.url(), "sending request");
        let response = self
            .client
            .execute(request)
            .await
            .map_err(Error::Transport)?;
        debug!(status = response.status().as_u16(), "response received");
        Ok(response)
    }
}

/// Drain the whole response body.
pub async fn read_body(response: Response) -> Result<Vec<u8>> {
    let bytes = response.bytes().await.map_err(Error::BodyRead)?;
    Ok(bytes.to_vec())
}
