use std::fmt::Display;

use aws_lambda_events::event::sns::SnsEvent;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use crate::{
    assembler::build_stack_update_message,
    clients::{cloudformation::StackInventory, slack::WebhookSink},
    error::NotifierError,
    models::{retry::RetryConfig, slack::NotificationPayload},
    parser::parse_stack_message,
};

/// Handles one SNS delivery. Only the first record is considered.
pub async fn process_event(
    event: &SnsEvent,
    inventory: &dyn StackInventory,
    sink: &dyn WebhookSink,
    channel: Option<&str>,
) -> Result<Option<NotificationPayload>, NotifierError> {
    let record = event.records.first().ok_or_else(|| {
        NotifierError::MalformedMessage("event contains no SNS records".to_string())
    })?;

    if event.records.len() > 1 {
        warn!(
            record_count = event.records.len(),
            "Event carries multiple records, only the first is processed"
        );
    }

    process_message(&record.sns.message, inventory, sink, channel).await
}

/// Parses a CloudFormation notification body and, for stack-level events, posts
/// the rendered message. Returns the delivered payload, or `None` when the event
/// concerns an individual resource and was skipped.
pub async fn process_message(
    message: &str,
    inventory: &dyn StackInventory,
    sink: &dyn WebhookSink,
    channel: Option<&str>,
) -> Result<Option<NotificationPayload>, NotifierError> {
    let event = parse_stack_message(message)?;

    if !event.is_stack_event()? {
        debug!(
            resource_type = event.resource_type()?,
            "Ignoring event for individual stack resource"
        );
        return Ok(None);
    }

    let stack_name = event.stack_name()?;
    let status = event.resource_status()?;

    info!(stack_name, status, "Processing stack status change");

    let payload = build_stack_update_message(&event, inventory, channel).await?;

    sink.deliver(&payload).await?;

    Ok(Some(payload))
}

/// Runs `operation` until it succeeds, fails with an error that `is_transient`
/// rejects, or uses up `config.max_attempts`. Pauses between attempts follow
/// [`RetryConfig::backoff_delay`] with up to 10% jitter either way.
pub async fn retry_with_backoff<T, E, Fut>(
    config: &RetryConfig,
    is_transient: impl Fn(&E) -> bool,
    mut operation: impl FnMut() -> Fut,
) -> Result<T, E>
where
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let mut attempt = 1;

    loop {
        let error = match operation().await {
            Ok(value) => return Ok(value),
            Err(error) => error,
        };

        if !is_transient(&error) {
            return Err(error);
        }

        if attempt >= config.max_attempts {
            if attempt > 1 {
                warn!(attempts = attempt, error = %error, "Giving up after repeated failures");
            }
            return Err(error);
        }

        let pause = config
            .backoff_delay(attempt)
            .mul_f64(rand::random_range(0.9..=1.1));

        debug!(
            attempt,
            pause_ms = pause.as_millis() as u64,
            error = %error,
            "Transient failure, retrying"
        );

        sleep(pause).await;
        attempt += 1;
    }
}
