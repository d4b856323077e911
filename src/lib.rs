//! SNS to Slack notifier
//!
//! This module exposes the function components for testing purposes.

pub mod config;
pub mod error;
pub mod event;
pub mod models;
pub mod services;
