//! CloudWatch alarm notifications.

use serde_json::Value;

use super::{console_url, escape_link_param, Rendered};
use crate::error::{AppError, AppResult};
use crate::models::{Attachment, Field};
use crate::services::fields::plain_text;
use crate::services::severity::alarm_color;

/// Renders an alarm state-change notification
pub fn render(message: &Value, region: &str) -> AppResult<Rendered> {
    let name = text(message, "AlarmName");
    let new_state = message
        .get("NewStateValue")
        .and_then(Value::as_str)
        .ok_or_else(|| AppError::UnknownState("alarm has no NewStateValue".to_string()))?;
    let color = alarm_color(new_state)?;

    let link = format!(
        "{}#alarm:alarmFilter=ANY;name={}",
        console_url("cloudwatch", region),
        escape_link_param(&name)
    );

    let attachment = Attachment {
        color: Some(color),
        fallback: format!("Alarm {} triggered", name),
        title: None,
        mrkdwn_in: Vec::new(),
        fields: vec![
            Field::new("Alarm Name", name.clone(), true),
            Field::new("Alarm Description", text(message, "AlarmDescription"), false),
            Field::new("Alarm reason", text(message, "NewStateReason"), false),
            Field::new("Old State", text(message, "OldStateValue"), true),
            Field::new("Current State", new_state, true),
            Field::new("Link to Alarm", link, false),
        ],
    };

    Ok(Rendered {
        summary: format!("AWS CloudWatch notification - {}", name),
        attachment,
    })
}

/// Missing and null values render as empty text
fn text(message: &Value, key: &str) -> String {
    match message.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(value) => plain_text(value),
    }
}
