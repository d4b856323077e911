pub mod classify;
pub mod fields;
pub mod format;
pub mod notification;
pub mod secret;
pub mod severity;

pub use classify::{classify, NotificationShape, RawPayload};
pub use fields::render_fields;
pub use notification::{encode_form_payload, DeliveryChannel, Notifier, WebhookDelivery};
pub use secret::{resolve_webhook_url, KmsSecretResolver, SecretResolver};
pub use severity::{alarm_color, FindingSeverity};
