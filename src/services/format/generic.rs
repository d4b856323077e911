//! Fallback rendering for notifications of unknown shape.

use serde_json::Value;

use super::Rendered;
use crate::models::{Attachment, Field};
use crate::services::fields::{plain_text, render_fields};

/// Renders any payload. Objects become one field per key; anything else
/// becomes a single unlabeled long field.
pub fn render(subject: Option<&str>, message: &Value) -> Rendered {
    let fields = match message {
        Value::Object(entries) => render_fields(entries),
        other => vec![Field {
            title: None,
            value: plain_text(other),
            short: false,
        }],
    };

    let title = subject
        .filter(|s| !s.is_empty())
        .unwrap_or("Message")
        .to_string();

    Rendered {
        summary: "AWS notification".to_string(),
        attachment: Attachment {
            color: None,
            fallback: "A new message".to_string(),
            title: Some(title),
            mrkdwn_in: vec!["value".to_string()],
            fields,
        },
    }
}
