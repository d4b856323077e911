//! Unit tests for per-shape rendering

use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use sns_slack_notifier::models::Color;
use sns_slack_notifier::services::format::{cloudwatch, console_url, generic, guardduty};

use crate::common::{alarm_message, finding_message};

// =============================================================================
// Partition Routing
// =============================================================================

#[rstest]
#[case("us-gov-west-1", "https://console.amazonaws-us-gov.com/cloudwatch/home?region=us-gov-west-1")]
#[case("us-gov-east-1", "https://console.amazonaws-us-gov.com/cloudwatch/home?region=us-gov-east-1")]
#[case("us-east-1", "https://console.aws.amazon.com/cloudwatch/home?region=us-east-1")]
#[case("eu-central-1", "https://console.aws.amazon.com/cloudwatch/home?region=eu-central-1")]
fn test_console_url_partition(#[case] region: &str, #[case] expected: &str) {
    assert_eq!(console_url("cloudwatch", region), expected);
}

// =============================================================================
// CloudWatch Alarm
// =============================================================================

#[test]
fn test_alarm_fields_in_fixed_order() {
    let rendered = cloudwatch::render(&alarm_message("cpu-high", "ALARM", "OK"), "us-east-1").unwrap();
    let attachment = &rendered.attachment;

    assert_eq!(rendered.summary, "AWS CloudWatch notification - cpu-high");
    assert_eq!(attachment.color, Some(Color::Danger));
    assert_eq!(attachment.fallback, "Alarm cpu-high triggered");

    let layout: Vec<(&str, bool)> = attachment
        .fields
        .iter()
        .map(|f| (f.title.as_deref().unwrap_or_default(), f.short))
        .collect();
    assert_eq!(
        layout,
        vec![
            ("Alarm Name", true),
            ("Alarm Description", false),
            ("Alarm reason", false),
            ("Old State", true),
            ("Current State", true),
            ("Link to Alarm", false),
        ]
    );
    assert_eq!(attachment.fields[3].value, "OK");
    assert_eq!(attachment.fields[4].value, "ALARM");
}

#[test]
fn test_alarm_link_uses_gov_host() {
    let rendered =
        cloudwatch::render(&alarm_message("cpu-high", "OK", "ALARM"), "us-gov-west-1").unwrap();

    assert_eq!(
        rendered.attachment.fields[5].value,
        "https://console.amazonaws-us-gov.com/cloudwatch/home?region=us-gov-west-1#alarm:alarmFilter=ANY;name=cpu-high"
    );
}

#[test]
fn test_alarm_unknown_state_fails() {
    let message = alarm_message("cpu-high", "BROKEN", "OK");
    assert!(cloudwatch::render(&message, "us-east-1").is_err());
}

// =============================================================================
// GuardDuty Finding
// =============================================================================

#[test]
fn test_high_severity_finding() {
    let rendered = guardduty::render(&finding_message(8.5, "us-east-1"), "us-east-1").unwrap();
    let attachment = &rendered.attachment;

    assert_eq!(
        rendered.summary,
        "Amazon GuardDuty Finding - Unprotected port on EC2 instance is being probed"
    );
    assert_eq!(attachment.color, Some(Color::Danger));

    let titles: Vec<&str> = attachment
        .fields
        .iter()
        .filter_map(|f| f.title.as_deref())
        .collect();
    assert_eq!(
        titles,
        vec![
            "Description",
            "Finding type",
            "First Seen",
            "Last Seen",
            "Severity",
            "Count",
            "Link to Finding"
        ]
    );
    assert_eq!(attachment.fields[4].value, "High");
    assert_eq!(attachment.fields[5].value, "3");
    assert_eq!(
        attachment.fields[6].value,
        "https://console.aws.amazon.com/guardduty/home?region=us-east-1#/findings?search=id%3D16afba5c5c43e07c9e3e5e2e544e95df"
    );
}

#[rstest]
#[case(1.0, "Low", Color::Neutral)]
#[case(5.0, "Medium", Color::Warning)]
#[case(7.0, "High", Color::Danger)]
fn test_finding_severity_rendering(
    #[case] score: f64,
    #[case] label: &str,
    #[case] color: Color,
) {
    let rendered = guardduty::render(&finding_message(score, "us-east-1"), "us-east-1").unwrap();

    assert_eq!(rendered.attachment.fields[4].value, label);
    assert_eq!(rendered.attachment.color, Some(color));
}

// =============================================================================
// Generic
// =============================================================================

#[test]
fn test_generic_text_message() {
    let rendered = generic::render(Some("Test"), &json!("Hello world"));
    let attachment = &rendered.attachment;

    assert_eq!(rendered.summary, "AWS notification");
    assert_eq!(attachment.title.as_deref(), Some("Test"));
    assert_eq!(attachment.fallback, "A new message");
    assert_eq!(attachment.fields.len(), 1);
    assert_eq!(attachment.fields[0].title, None);
    assert_eq!(attachment.fields[0].value, "Hello world");
    assert!(!attachment.fields[0].short);
}

#[test]
fn test_generic_mapping_uses_field_renderer() {
    let message = json!({"state": "stopped", "instance-id": "i-0123456789abcdef0"});
    let rendered = generic::render(None, &message);

    assert_eq!(rendered.attachment.title.as_deref(), Some("Message"));
    assert_eq!(rendered.attachment.mrkdwn_in, vec!["value".to_string()]);
    assert_eq!(rendered.attachment.fields.len(), 2);
    assert_eq!(rendered.attachment.fields[0].title.as_deref(), Some("state"));
}
