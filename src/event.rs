//! SNS event envelope and invocation handling.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::models::{DeliveryResult, InvocationResponse};
use crate::services::{Notifier, RawPayload};

/// Event delivered by an SNS subscription
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsEvent {
    #[serde(rename = "Records")]
    pub records: Vec<SnsRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsMessage,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnsMessage {
    #[serde(rename = "Subject", default)]
    pub subject: Option<String>,
    /// Usually a string, possibly holding JSON
    #[serde(rename = "Message")]
    pub message: Value,
    #[serde(rename = "TopicArn")]
    pub topic_arn: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Extracts the region segment of `arn:partition:sns:region:account:topic`
pub fn region_from_topic_arn(arn: &str) -> AppResult<&str> {
    match arn.split(':').nth(3) {
        Some(region) if !region.is_empty() => Ok(region),
        _ => Err(AppError::InvalidEvent(format!(
            "cannot extract region from topic ARN '{}'",
            arn
        ))),
    }
}

/// Handles one invocation: unwraps the first record and notifies Slack.
///
/// Secret resolution failures are folded into the response with code 0;
/// other errors fail the invocation.
pub async fn handle_event(notifier: &Notifier, event: SnsEvent) -> AppResult<InvocationResponse> {
    if notifier.config().log_events {
        log::warn!("Event logging enabled: `{}`", serde_json::to_string(&event)?);
    }

    let record = event
        .records
        .first()
        .ok_or_else(|| AppError::InvalidEvent("event has no records".to_string()))?;
    let sns = &record.sns;
    let region = region_from_topic_arn(&sns.topic_arn)?;

    let result = match notifier
        .notify(
            sns.subject.as_deref(),
            RawPayload::from(sns.message.clone()),
            region,
        )
        .await
    {
        Ok(result) => result,
        Err(e) if !e.fails_invocation() => DeliveryResult {
            status_code: 0,
            info: e.to_string(),
        },
        Err(e) => {
            log::error!("Failed to render notification from topic {}: {}", sns.topic_arn, e);
            return Err(e);
        }
    };

    if !result.is_success() {
        log::error!(
            "Error: received status `{}` using event `{}`",
            result.info,
            serde_json::to_string(&event)?
        );
    }

    Ok(result.into())
}
