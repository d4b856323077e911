//! Slack message models.
//!
//! This module contains the attachment/field structures rendered from a
//! notification, the outbound envelope posted to the webhook, and the
//! delivery result returned to the Lambda runtime.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::SlackSettings;
use crate::error::AppResult;

/// Values shorter than this many characters are laid out side by side
pub const SHORT_FIELD_LIMIT: usize = 25;

// =============================================================================
// Color
// =============================================================================

/// Attachment color token understood by Slack
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Color {
    #[serde(rename = "good")]
    Good,
    #[serde(rename = "warning")]
    Warning,
    #[serde(rename = "danger")]
    Danger,
    #[serde(rename = "#777777")]
    Neutral,
}

// =============================================================================
// Field / Attachment
// =============================================================================

/// One labeled datum within an attachment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub value: String,
    pub short: bool,
}

impl Field {
    /// Creates a titled field with an explicit layout
    pub fn new(title: impl Into<String>, value: impl Into<String>, short: bool) -> Self {
        Self {
            title: Some(title.into()),
            value: value.into(),
            short,
        }
    }

    /// Creates a field whose layout follows the value length
    pub fn sized(title: Option<String>, value: String) -> Self {
        let short = value.chars().count() < SHORT_FIELD_LIMIT;
        Self {
            title,
            value,
            short,
        }
    }
}

/// Color-coded message block
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Attachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
    pub fallback: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub mrkdwn_in: Vec<String>,
    pub fields: Vec<Field>,
}

// =============================================================================
// Outbound Envelope
// =============================================================================

/// Complete message posted to the Slack webhook.
///
/// Kept as an ordered JSON object so pre-formatted payloads can be merged
/// key by key.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OutboundEnvelope(Map<String, Value>);

impl OutboundEnvelope {
    /// Creates the base envelope from configuration, with no attachments
    pub fn base(settings: &SlackSettings) -> Self {
        let mut map = Map::new();
        map.insert("channel".to_string(), Value::from(settings.channel.as_str()));
        map.insert("username".to_string(), Value::from(settings.username.as_str()));
        map.insert(
            "icon_emoji".to_string(),
            Value::from(settings.icon_emoji.as_str()),
        );
        map.insert("attachments".to_string(), Value::Array(Vec::new()));
        Self(map)
    }

    /// Sets the top-level summary line
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.0.insert("text".to_string(), Value::String(text.into()));
    }

    /// Appends a rendered attachment
    pub fn push_attachment(&mut self, attachment: &Attachment) -> AppResult<()> {
        let value = serde_json::to_value(attachment)?;
        match self.0.get_mut("attachments") {
            Some(Value::Array(list)) => list.push(value),
            _ => {
                self.0
                    .insert("attachments".to_string(), Value::Array(vec![value]));
            }
        }
        Ok(())
    }

    /// Shallow merge where every key of `overrides` replaces the envelope's
    pub fn merge(&mut self, overrides: &Map<String, Value>) {
        for (key, value) in overrides {
            self.0.insert(key.clone(), value.clone());
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn text(&self) -> Option<&str> {
        self.0.get("text").and_then(Value::as_str)
    }

    pub fn channel(&self) -> Option<&str> {
        self.0.get("channel").and_then(Value::as_str)
    }

    pub fn attachments(&self) -> &[Value] {
        match self.0.get("attachments") {
            Some(Value::Array(list)) => list,
            _ => &[],
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string(&self.0)?)
    }
}

// =============================================================================
// Results
// =============================================================================

/// Result of posting to the webhook
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryResult {
    /// HTTP status code, 0 when no response was received
    pub status_code: u16,
    /// Response headers rendered as text, or the transport error
    pub info: String,
}

impl DeliveryResult {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status_code)
    }
}

/// Value returned to the Lambda runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationResponse {
    pub code: u16,
    pub info: String,
}

impl From<DeliveryResult> for InvocationResponse {
    fn from(result: DeliveryResult) -> Self {
        Self {
            code: result.status_code,
            info: result.info,
        }
    }
}
