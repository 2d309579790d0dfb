//! Models client.

use std::io::Write;

use tracing::info;

use super::types::{ModelDescriptor, ModelList};
use crate::config::ClientConfig;
use crate::transport::{read_body, HttpTransport};
use crate::{Error, Result};

/// Endpoint path for model listing.
pub const MODELS_PATH: &str = "/v1/models";

/// Client for the model listing endpoint.
pub struct ModelsClient {
    transport: HttpTransport,
}

impl ModelsClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            transport: HttpTransport::new(config)?,
        })
    }

    /// Fetch the available models in server order.
    ///
    /// `Response Status Code: <code>` is written to `out` as soon as the
    /// response head arrives, before the body is read. The status itself is
    /// not checked: a 401 with a well-formed `data` array still succeeds, and
    /// an error body fails as [`Error::Deserialization`].
    pub async fn list_models<W: Write>(&self, out: &mut W) -> Result<Vec<ModelDescriptor>> {
        let request = self.transport.get(MODELS_PATH)?;
        let response = self.transport.execute(request).await?;

        let status = response.status().as_u16();
        writeln!(out, "Response Status Code: {}", status)?;

        let body = read_body(response).await?;
        let list: ModelList = serde_json::from_slice(&body).map_err(Error::Deserialization)?;

        info!(status, count = list.data.len(), "listed models");
        Ok(list.data)
    }
}
