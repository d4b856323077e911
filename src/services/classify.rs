//! Notification shape classification.
//!
//! The payload is untrusted and schema-less: which keys are present decides
//! how it is rendered. Classification is total, with `Generic` as the
//! catch-all, so it never fails.

use serde_json::Value;

/// Detail type carried by GuardDuty findings routed through EventBridge
pub const GUARDDUTY_DETAIL_TYPE: &str = "GuardDuty Finding";

// =============================================================================
// Raw Payload
// =============================================================================

/// Notification body as received from the topic
#[derive(Debug, Clone, PartialEq)]
pub enum RawPayload {
    /// Text that may hold JSON
    Text(String),
    /// Already structured body
    Structured(Value),
}

impl RawPayload {
    /// Parses text bodies as JSON, keeping the raw text when that fails
    pub fn into_value(self) -> Value {
        match self {
            RawPayload::Text(text) => match serde_json::from_str(&text) {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("JSON decode error: {}", e);
                    Value::String(text)
                }
            },
            RawPayload::Structured(value) => value,
        }
    }
}

impl From<Value> for RawPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => RawPayload::Text(text),
            other => RawPayload::Structured(other),
        }
    }
}

impl From<&str> for RawPayload {
    fn from(text: &str) -> Self {
        RawPayload::Text(text.to_string())
    }
}

// =============================================================================
// Notification Shape
// =============================================================================

/// Structural signature of a notification payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationShape {
    /// CloudWatch alarm state change
    Alarm,
    /// GuardDuty finding
    Finding,
    /// Already a Slack message, merged into the envelope as-is
    Preformatted,
    /// Anything else
    Generic,
}

impl std::fmt::Display for NotificationShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationShape::Alarm => write!(f, "alarm"),
            NotificationShape::Finding => write!(f, "finding"),
            NotificationShape::Preformatted => write!(f, "preformatted"),
            NotificationShape::Generic => write!(f, "generic"),
        }
    }
}

/// Classifies a parsed payload. Checks run in priority order.
pub fn classify(message: &Value) -> NotificationShape {
    let Some(map) = message.as_object() else {
        return NotificationShape::Generic;
    };

    if map.contains_key("AlarmName") {
        NotificationShape::Alarm
    } else if map.get("detail-type").and_then(Value::as_str) == Some(GUARDDUTY_DETAIL_TYPE) {
        NotificationShape::Finding
    } else if map.contains_key("attachments") || map.contains_key("text") {
        NotificationShape::Preformatted
    } else {
        NotificationShape::Generic
    }
}
