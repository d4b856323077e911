//! Webhook delivery channel.
//!
//! Posts the rendered envelope to the Slack incoming webhook as
//! URL-encoded form content with a single `payload` field.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, CONTENT_TYPE};

use super::DeliveryChannel;
use crate::error::AppResult;
use crate::models::{DeliveryResult, OutboundEnvelope};

/// Builds the form body `payload=<json envelope>`
pub fn encode_form_payload(envelope: &OutboundEnvelope) -> AppResult<String> {
    let json = envelope.to_json()?;
    Ok(url::form_urlencoded::Serializer::new(String::new())
        .append_pair("payload", &json)
        .finish())
}

/// reqwest-backed delivery channel
pub struct WebhookDelivery {
    client: reqwest::Client,
}

impl WebhookDelivery {
    /// Creates a new webhook delivery channel
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                reqwest::Client::new()
            });

        Self { client }
    }

    /// Renders response headers one `name: value` per line
    fn headers_as_text(headers: &HeaderMap) -> String {
        headers
            .iter()
            .map(|(name, value)| {
                format!("{}: {}\n", name, String::from_utf8_lossy(value.as_bytes()))
            })
            .collect()
    }
}

impl Default for WebhookDelivery {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryChannel for WebhookDelivery {
    async fn post(&self, url: &str, form_body: &str) -> DeliveryResult {
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(form_body.to_string())
            .send()
            .await;

        match response {
            Ok(response) => {
                let status_code = response.status().as_u16();
                let info = Self::headers_as_text(response.headers());
                if !response.status().is_success() {
                    log::error!("Slack returned HTTP {}", status_code);
                }
                DeliveryResult { status_code, info }
            }
            Err(e) => {
                let info = if e.is_timeout() {
                    "Request to Slack timed out".to_string()
                } else if e.is_connect() {
                    "Connection to Slack failed".to_string()
                } else {
                    format!("Slack request failed: {}", e)
                };
                log::error!("{}", info);
                DeliveryResult {
                    status_code: e.status().map(|s| s.as_u16()).unwrap_or(0),
                    info,
                }
            }
        }
    }
}
