use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    config::Config,
    error::NotifierError,
    models::{retry::RetryConfig, slack::NotificationPayload},
    utils::retry_with_backoff,
};

/// Destination for rendered notifications.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<(), NotifierError>;
}

/// Outcome of a single failed POST.
#[derive(Debug, Error)]
enum PostFailure {
    /// Network trouble, throttling or a server-side error; worth another attempt.
    #[error("{0}")]
    Transient(String),

    /// The webhook refused the message; resending it will not help.
    #[error("{0}")]
    Rejected(String),
}

impl PostFailure {
    fn is_transient(&self) -> bool {
        matches!(self, PostFailure::Transient(_))
    }
}

impl From<PostFailure> for NotifierError {
    fn from(failure: PostFailure) -> Self {
        NotifierError::WebhookDelivery(failure.to_string())
    }
}

pub struct SlackWebhookClient {
    http_client: Client,
    webhook_url: String,
    retry_config: RetryConfig,
}

impl SlackWebhookClient {
    pub fn new(config: &Config) -> Result<Self, NotifierError> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.webhook_timeout_seconds))
            .build()
            .map_err(|e| {
                NotifierError::WebhookDelivery(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            timeout_seconds = config.webhook_timeout_seconds,
            max_attempts = config.max_retry_attempts,
            "Slack webhook client initialized"
        );

        Ok(Self {
            http_client,
            webhook_url: config.slack_webhook_url.clone(),
            retry_config: config.retry_config(),
        })
    }

    async fn post_once(&self, payload: &NotificationPayload) -> Result<(), PostFailure> {
        let response = self
            .http_client
            .post(&self.webhook_url)
            .json(payload)
            .send()
            .await
            .map_err(|e| PostFailure::Transient(e.to_string()))?;

        let status = response.status();

        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = format!("webhook returned HTTP {}: {}", status.as_u16(), body);

        if status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS {
            Err(PostFailure::Transient(message))
        } else {
            Err(PostFailure::Rejected(message))
        }
    }
}

#[async_trait]
impl WebhookSink for SlackWebhookClient {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<(), NotifierError> {
        debug!(
            attachment_count = payload.attachments.len(),
            channel = payload.channel.as_deref(),
            "Posting notification to webhook"
        );

        retry_with_backoff(&self.retry_config, PostFailure::is_transient, || {
            self.post_once(payload)
        })
        .await?;

        info!("Notification delivered to webhook");

        Ok(())
    }
}
