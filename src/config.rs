use std::env;

/// Function configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Webhook URL, or its base64 KMS-encrypted form
    pub webhook_url: String,
    pub slack: SlackSettings,
    /// Prepended to summary lines as `[name] ` when set
    pub environment_name: Option<String>,
    /// Log every inbound event in full
    pub log_events: bool,
    /// Region used for the KMS client
    pub aws_region: Option<String>,
}

/// Presentation defaults for the outbound Slack message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlackSettings {
    pub channel: String,
    pub username: String,
    pub icon_emoji: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            webhook_url: required("SLACK_WEBHOOK_URL")?,
            slack: SlackSettings::from_env()?,
            environment_name: env::var("ENVIRONMENT_NAME")
                .ok()
                .filter(|name| !name.is_empty()),
            log_events: env::var("LOG_EVENTS")
                .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
                .unwrap_or(false),
            aws_region: env::var("AWS_REGION").ok().filter(|r| !r.is_empty()),
        })
    }

    /// Summary line prefix derived from the environment name
    pub fn prefix(&self) -> String {
        match self.environment_name.as_deref() {
            Some(name) if !name.is_empty() => format!("[{}] ", name),
            _ => String::new(),
        }
    }

    /// True when the webhook value must go through KMS before use
    pub fn webhook_is_encrypted(&self) -> bool {
        !self.webhook_url.starts_with("http")
    }
}

impl SlackSettings {
    /// Load Slack presentation settings from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            channel: required("SLACK_CHANNEL")?,
            username: required("SLACK_USERNAME")?,
            icon_emoji: required("SLACK_EMOJI")?,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name))
}

#[derive(Debug)]
pub enum ConfigError {
    MissingVar(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::MissingVar(name) => {
                write!(f, "{} environment variable is required", name)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
