//! Webhook URL resolution.
//!
//! The configured webhook is either a URL literal or a base64 blob
//! encrypted with KMS.

use async_trait::async_trait;
use aws_sdk_kms::config::Region;
use aws_sdk_kms::error::DisplayErrorContext;
use aws_sdk_kms::primitives::Blob;
use base64::{engine::general_purpose::STANDARD, Engine};

use crate::config::Config;
use crate::error::{AppError, AppResult};

/// Decrypts encrypted configuration values
#[async_trait]
pub trait SecretResolver: Send + Sync {
    async fn decrypt(&self, encrypted: &str) -> AppResult<String>;
}

/// KMS-backed secret resolver
pub struct KmsSecretResolver {
    client: aws_sdk_kms::Client,
}

impl KmsSecretResolver {
    /// Creates a resolver from the ambient AWS configuration
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = region {
            loader = loader.region(Region::new(region));
        }
        let config = loader.load().await;

        Self {
            client: aws_sdk_kms::Client::new(&config),
        }
    }
}

#[async_trait]
impl SecretResolver for KmsSecretResolver {
    async fn decrypt(&self, encrypted: &str) -> AppResult<String> {
        let ciphertext = STANDARD
            .decode(encrypted.trim())
            .map_err(|e| AppError::SecretResolution(format!("Invalid base64 blob: {}", e)))?;

        let output = self
            .client
            .decrypt()
            .ciphertext_blob(Blob::new(ciphertext))
            .send()
            .await
            .map_err(|e| {
                AppError::SecretResolution(format!("KMS decrypt failed: {}", DisplayErrorContext(&e)))
            })?;

        let plaintext = output
            .plaintext()
            .ok_or_else(|| AppError::SecretResolution("KMS returned no plaintext".to_string()))?;

        String::from_utf8(plaintext.as_ref().to_vec())
            .map_err(|_| AppError::SecretResolution("Plaintext is not valid UTF-8".to_string()))
    }
}

/// Returns the webhook URL, decrypting it first unless it is already a URL
pub async fn resolve_webhook_url(
    config: &Config,
    resolver: &dyn SecretResolver,
) -> AppResult<String> {
    if !config.webhook_is_encrypted() {
        return Ok(config.webhook_url.clone());
    }

    resolver.decrypt(&config.webhook_url).await.map_err(|e| {
        log::error!("Failed to decrypt URL with KMS: {}", e);
        e
    })
}
