//! State and severity lookups for attachment colors.

use crate::error::{AppError, AppResult};
use crate::models::Color;

/// Maps a CloudWatch alarm state to its color.
///
/// The state set is closed; anything else is an error rather than a default.
pub fn alarm_color(state: &str) -> AppResult<Color> {
    match state {
        "OK" => Ok(Color::Good),
        "INSUFFICIENT_DATA" => Ok(Color::Warning),
        "ALARM" => Ok(Color::Danger),
        other => Err(AppError::UnknownState(format!(
            "alarm state '{}' is not one of OK, INSUFFICIENT_DATA, ALARM",
            other
        ))),
    }
}

/// Severity tier of a GuardDuty finding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingSeverity {
    Low,
    Medium,
    High,
}

impl FindingSeverity {
    /// Buckets a numeric severity score
    pub fn from_score(score: f64) -> Self {
        if score < 4.0 {
            FindingSeverity::Low
        } else if score < 7.0 {
            FindingSeverity::Medium
        } else {
            FindingSeverity::High
        }
    }

    pub fn color(&self) -> Color {
        match self {
            FindingSeverity::Low => Color::Neutral,
            FindingSeverity::Medium => Color::Warning,
            FindingSeverity::High => Color::Danger,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FindingSeverity::Low => "Low",
            FindingSeverity::Medium => "Medium",
            FindingSeverity::High => "High",
        }
    }
}
