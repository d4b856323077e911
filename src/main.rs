use lambda_runtime::{service_fn, LambdaEvent};

use sns_slack_notifier::config;
use sns_slack_notifier::event::{handle_event, SnsEvent};
use sns_slack_notifier::services::{KmsSecretResolver, Notifier, WebhookDelivery};

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Load configuration
    let config = config::Config::from_env().map_err(|e| {
        log::error!("Configuration error: {}", e);
        e
    })?;

    let secrets = KmsSecretResolver::from_env(config.aws_region.clone()).await;
    let notifier = Notifier::new(config, Box::new(WebhookDelivery::new()), Box::new(secrets));
    let notifier = &notifier;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<SnsEvent>| async move {
        let response = handle_event(notifier, event.payload).await?;
        Ok::<String, lambda_runtime::Error>(serde_json::to_string(&response)?)
    }))
    .await
}
