//! Notification dispatch.
//!
//! Classifies an incoming notification, renders the matching attachment
//! into the outbound envelope, and hands it to a delivery channel.

pub mod webhook;

use async_trait::async_trait;

use crate::config::Config;
use crate::error::AppResult;
use crate::models::{DeliveryResult, OutboundEnvelope};
use crate::services::classify::{classify, NotificationShape, RawPayload};
use crate::services::format::{cloudwatch, generic, guardduty, Rendered};
use crate::services::secret::{resolve_webhook_url, SecretResolver};

pub use webhook::{encode_form_payload, WebhookDelivery};

// =============================================================================
// Delivery Channel Trait
// =============================================================================

/// Transport that posts a form-encoded payload to a webhook.
///
/// HTTP-level failures are reported in the result, never as errors.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    async fn post(&self, url: &str, form_body: &str) -> DeliveryResult;
}

// =============================================================================
// Notifier
// =============================================================================

/// Renders notifications and delivers them to Slack
pub struct Notifier {
    config: Config,
    delivery: Box<dyn DeliveryChannel>,
    secrets: Box<dyn SecretResolver>,
}

impl Notifier {
    pub fn new(
        config: Config,
        delivery: Box<dyn DeliveryChannel>,
        secrets: Box<dyn SecretResolver>,
    ) -> Self {
        Self {
            config,
            delivery,
            secrets,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Builds the outbound envelope for a notification without sending it
    pub fn dispatch(
        &self,
        subject: Option<&str>,
        message: RawPayload,
        region: &str,
    ) -> AppResult<OutboundEnvelope> {
        let message = message.into_value();
        let mut envelope = OutboundEnvelope::base(&self.config.slack);

        let shape = classify(&message);
        log::debug!("Classified notification as {}", shape);

        match shape {
            NotificationShape::Alarm => {
                let rendered = cloudwatch::render(&message, region)?;
                self.apply(&mut envelope, rendered)?;
            }
            NotificationShape::Finding => {
                let region = guardduty::finding_region(&message).unwrap_or(region);
                let rendered = guardduty::render(&message, region)?;
                self.apply(&mut envelope, rendered)?;
            }
            NotificationShape::Preformatted => {
                if let Some(overrides) = message.as_object() {
                    envelope.merge(overrides);
                }
            }
            NotificationShape::Generic => {
                let rendered = generic::render(subject, &message);
                self.apply(&mut envelope, rendered)?;
            }
        }

        Ok(envelope)
    }

    /// Renders a notification and posts it to the configured webhook
    pub async fn notify(
        &self,
        subject: Option<&str>,
        message: RawPayload,
        region: &str,
    ) -> AppResult<DeliveryResult> {
        let envelope = self.dispatch(subject, message, region)?;
        let body = encode_form_payload(&envelope)?;
        let url = resolve_webhook_url(&self.config, self.secrets.as_ref()).await?;

        Ok(self.delivery.post(&url, &body).await)
    }

    fn apply(&self, envelope: &mut OutboundEnvelope, rendered: Rendered) -> AppResult<()> {
        envelope.set_text(format!("{}{}", self.config.prefix(), rendered.summary));
        envelope.push_attachment(&rendered.attachment)
    }
}
