//! GuardDuty finding notifications.

use serde_json::Value;

use super::{console_url, Rendered};
use crate::error::{AppError, AppResult};
use crate::models::{Attachment, Field};
use crate::services::fields::plain_text;
use crate::services::severity::FindingSeverity;

/// Region the finding was raised in, if the event carries one
pub fn finding_region(message: &Value) -> Option<&str> {
    message.get("region").and_then(Value::as_str)
}

/// Renders a GuardDuty finding
pub fn render(message: &Value, region: &str) -> AppResult<Rendered> {
    let score = message
        .pointer("/detail/severity")
        .and_then(Value::as_f64)
        .ok_or_else(|| AppError::InvalidPayload("finding has no numeric detail.severity".to_string()))?;
    let id = message
        .pointer("/detail/id")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::InvalidPayload("finding has no detail.id".to_string()))?;

    let severity = FindingSeverity::from_score(score);
    let title = text(message, "/detail/title");
    let link = format!(
        "{}#/findings?search=id%3D{}",
        console_url("guardduty", region),
        id
    );

    let attachment = Attachment {
        color: Some(severity.color()),
        fallback: format!("GuardDuty Finding: {}", title),
        title: None,
        mrkdwn_in: Vec::new(),
        fields: vec![
            Field::new("Description", text(message, "/detail/description"), false),
            Field::new("Finding type", text(message, "/detail/type"), false),
            Field::new("First Seen", text(message, "/detail/service/eventFirstSeen"), true),
            Field::new("Last Seen", text(message, "/detail/service/eventLastSeen"), true),
            Field::new("Severity", severity.as_str(), true),
            Field::new("Count", text(message, "/detail/service/count"), true),
            Field::new("Link to Finding", link, false),
        ],
    };

    Ok(Rendered {
        summary: format!("Amazon GuardDuty Finding - {}", title),
        attachment,
    })
}

fn text(message: &Value, pointer: &str) -> String {
    match message.pointer(pointer) {
        None | Some(Value::Null) => String::new(),
        Some(value) => plain_text(value),
    }
}
