use std::net::TcpListener;

use anyhow::Result;
use stack_notifier::{
    clients::slack::{SlackWebhookClient, WebhookSink},
    error::NotifierError,
    models::slack::{Attachment, NotificationPayload},
};
use wiremock::{Mock, MockServer, ResponseTemplate, matchers::method};

use crate::common::test_config;

fn status_payload() -> NotificationPayload {
    NotificationPayload {
        icon_emoji: ":cloud:".to_string(),
        username: "cf-bot".to_string(),
        text: "Stack: demo has entered status: UPDATE_COMPLETE".to_string(),
        attachments: vec![Attachment::titled(
            "Stack demo is now status UPDATE_COMPLETE".to_string(),
        )],
        channel: None,
    }
}

fn client_with_attempts(uri: &str, max_attempts: u32) -> Result<SlackWebhookClient> {
    let mut config = test_config(uri);
    config.max_retry_attempts = max_attempts;
    Ok(SlackWebhookClient::new(&config)?)
}

async fn respond_once(server: &MockServer, status: u16) {
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(status))
        .up_to_n_times(1)
        .expect(1)
        .mount(server)
        .await;
}

/// Test: A server error followed by success is delivered on the second attempt
#[tokio::test]
async fn test_server_error_then_success_is_delivered() -> Result<()> {
    let server = MockServer::start().await;
    respond_once(&server, 503).await;
    respond_once(&server, 200).await;

    let client = client_with_attempts(&server.uri(), 3)?;
    client.deliver(&status_payload()).await?;

    assert_eq!(server.received_requests().await.unwrap_or_default().len(), 2);

    Ok(())
}

/// Test: Rate limiting is treated as transient
#[tokio::test]
async fn test_rate_limited_post_is_retried() -> Result<()> {
    let server = MockServer::start().await;
    respond_once(&server, 429).await;
    respond_once(&server, 429).await;
    respond_once(&server, 200).await;

    let client = client_with_attempts(&server.uri(), 3)?;
    client.deliver(&status_payload()).await?;

    Ok(())
}

/// Test: A rejected payload is never resent
#[tokio::test]
async fn test_client_error_is_not_retried() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_string("invalid_payload"))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_attempts(&server.uri(), 4)?;

    match client.deliver(&status_payload()).await {
        Err(NotifierError::WebhookDelivery(message)) => {
            assert!(message.contains("400"), "unexpected message: {}", message);
            assert!(message.contains("invalid_payload"));
        }
        other => panic!("Expected webhook delivery error, got {:?}", other),
    }

    Ok(())
}

/// Test: Persistent server errors stop after the configured attempts
#[tokio::test]
async fn test_persistent_server_error_uses_every_attempt() -> Result<()> {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .expect(3)
        .mount(&server)
        .await;

    let client = client_with_attempts(&server.uri(), 3)?;

    let result = client.deliver(&status_payload()).await;

    assert!(matches!(result, Err(NotifierError::WebhookDelivery(ref m)) if m.contains("500")));

    Ok(())
}

/// Test: Unreachable webhooks fail with a delivery error after retrying
#[tokio::test]
async fn test_unreachable_webhook_fails() -> Result<()> {
    let listener = TcpListener::bind("127.0.0.1:0")?;
    let uri = format!("http://{}", listener.local_addr()?);
    drop(listener);

    let client = client_with_attempts(&uri, 2)?;

    let result = client.deliver(&status_payload()).await;

    assert!(matches!(result, Err(NotifierError::WebhookDelivery(_))));

    Ok(())
}
