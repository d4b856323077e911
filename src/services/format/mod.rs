//! Per-shape attachment renderers.
//!
//! Each renderer turns a classified payload into a summary line (without
//! the environment prefix) and a single attachment.

pub mod cloudwatch;
pub mod generic;
pub mod guardduty;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};

use crate::models::Attachment;

/// Characters left unescaped in console link parameters
const LINK_PARAM: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~')
    .remove(b'/');

/// Summary line and attachment produced for one notification
#[derive(Debug, Clone, PartialEq)]
pub struct Rendered {
    pub summary: String,
    pub attachment: Attachment,
}

/// Console home URL for a service, routed by partition
pub fn console_url(service: &str, region: &str) -> String {
    let host = if region.starts_with("us-gov-") {
        "console.amazonaws-us-gov.com"
    } else {
        "console.aws.amazon.com"
    };
    format!("https://{}/{}/home?region={}", host, service, region)
}

/// Escapes a value for use inside a console link
pub fn escape_link_param(value: &str) -> String {
    percent_encoding::utf8_percent_encode(value, LINK_PARAM).to_string()
}
