//! Webhook delivery over HTTP POST.

use serde_json::Value;
use tracing::info;

use crate::error::ExportError;

/// Blocking HTTP client for forwarding annotated records to a user-supplied
/// endpoint. Fire-and-forget: no authentication, no retries; the response
/// status code is reported back to the caller.
#[derive(Debug, Clone)]
pub struct WebhookClient {
    client: reqwest::blocking::Client,
}

impl WebhookClient {
    pub fn new() -> Result<Self, ExportError> {
        let client = reqwest::blocking::Client::builder()
            .build()
            .map_err(|e| ExportError::Network(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// POSTs the payload as a JSON array and returns the HTTP status code.
    pub fn deliver(&self, url: &str, payload: &[Value]) -> Result<u16, ExportError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|e| ExportError::InvalidUrl(format!("{url}: {e}")))?;
        let response = self.client.post(parsed).json(payload).send()?;
        let status = response.status().as_u16();
        info!(url, status, records = payload.len(), "webhook delivered");
        Ok(status)
    }
}
