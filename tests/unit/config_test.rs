//! Unit tests for configuration parsing
//!
//! Tests environment variable parsing and default values.
//!
//! Note: These tests modify global environment variables and must run serially.

use serial_test::serial;
use sns_slack_notifier::config::{Config, ConfigError};

const VARS: [&str; 7] = [
    "SLACK_WEBHOOK_URL",
    "SLACK_CHANNEL",
    "SLACK_USERNAME",
    "SLACK_EMOJI",
    "ENVIRONMENT_NAME",
    "LOG_EVENTS",
    "AWS_REGION",
];

fn clear_env() {
    for var in VARS {
        std::env::remove_var(var);
    }
}

fn set_required() {
    std::env::set_var("SLACK_WEBHOOK_URL", "https://hooks.slack.com/services/T/B/X");
    std::env::set_var("SLACK_CHANNEL", "#alerts");
    std::env::set_var("SLACK_USERNAME", "reporter");
    std::env::set_var("SLACK_EMOJI", ":aws:");
}

#[test]
#[serial]
fn test_config_defaults() {
    clear_env();
    set_required();

    let config = Config::from_env().unwrap();

    assert_eq!(config.slack.channel, "#alerts");
    assert_eq!(config.slack.username, "reporter");
    assert_eq!(config.slack.icon_emoji, ":aws:");
    assert_eq!(config.environment_name, None);
    assert!(!config.log_events);
    assert_eq!(config.prefix(), "");
    assert!(!config.webhook_is_encrypted());

    clear_env();
}

#[test]
#[serial]
fn test_config_environment_prefix() {
    clear_env();
    set_required();
    std::env::set_var("ENVIRONMENT_NAME", "staging");

    let config = Config::from_env().unwrap();
    assert_eq!(config.prefix(), "[staging] ");

    std::env::set_var("ENVIRONMENT_NAME", "");
    let config = Config::from_env().unwrap();
    assert_eq!(config.prefix(), "");

    clear_env();
}

#[test]
#[serial]
fn test_config_log_events_flag() {
    clear_env();
    set_required();

    for (value, expected) in [("True", true), ("true", true), ("1", true), ("False", false), ("yes", false)] {
        std::env::set_var("LOG_EVENTS", value);
        assert_eq!(Config::from_env().unwrap().log_events, expected, "LOG_EVENTS={}", value);
    }

    clear_env();
}

#[test]
#[serial]
fn test_config_encrypted_webhook() {
    clear_env();
    set_required();
    std::env::set_var("SLACK_WEBHOOK_URL", "AQICAHhRmZ0YWtl");

    let config = Config::from_env().unwrap();
    assert!(config.webhook_is_encrypted());

    clear_env();
}

#[test]
#[serial]
fn test_config_missing_webhook() {
    clear_env();
    set_required();
    std::env::remove_var("SLACK_WEBHOOK_URL");

    let err = Config::from_env().unwrap_err();
    assert!(matches!(err, ConfigError::MissingVar("SLACK_WEBHOOK_URL")));
    assert_eq!(
        err.to_string(),
        "SLACK_WEBHOOK_URL environment variable is required"
    );

    clear_env();
}
