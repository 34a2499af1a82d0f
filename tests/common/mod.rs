use std::sync::{
    Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use stack_notifier::{
    clients::{cloudformation::StackInventory, slack::WebhookSink},
    config::Config,
    error::NotifierError,
    models::{resource::ResourceRecord, slack::NotificationPayload},
};

pub const STACK_ID: &str = "arn:aws:cloudformation:us-west-2:1:stack/demo/x";

/// Notification body in the shape CloudFormation publishes to SNS.
pub fn stack_message(resource_type: &str, status: &str) -> String {
    format!(
        "StackId='{STACK_ID}'\n\
         Timestamp='2020-01-01T00:00:00Z'\n\
         EventId='e1'\n\
         LogicalResourceId='demo'\n\
         Namespace='123456789012'\n\
         PhysicalResourceId='{STACK_ID}'\n\
         ResourceProperties='null'\n\
         ResourceStatus='{status}'\n\
         ResourceStatusReason='User Initiated'\n\
         ResourceType='{resource_type}'\n\
         StackName='demo'\n\
         ClientRequestToken='null'\n"
    )
}

pub fn stack_status_message(status: &str) -> String {
    stack_message("AWS::CloudFormation::Stack", status)
}

pub fn test_config(webhook_url: &str) -> Config {
    Config {
        slack_webhook_url: webhook_url.to_string(),
        slack_channel: None,
        webhook_timeout_seconds: 5,
        max_retry_attempts: 1,
        initial_retry_delay_ms: 10,
        max_retry_delay_ms: 50,
        retry_backoff_multiplier: 2,
    }
}

pub struct FakeInventory {
    resources: Option<Vec<ResourceRecord>>,
    calls: AtomicUsize,
}

impl FakeInventory {
    pub fn with_types(types: &[&str]) -> Self {
        Self {
            resources: Some(types.iter().map(|t| ResourceRecord::new(*t)).collect()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            resources: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StackInventory for FakeInventory {
    async fn stack_resources(&self, stack_name: &str) -> Result<Vec<ResourceRecord>, NotifierError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.resources.clone().ok_or_else(|| {
            NotifierError::InventoryUnavailable(format!("Stack with id {} does not exist", stack_name))
        })
    }
}

#[derive(Default)]
pub struct RecordingSink {
    delivered: Mutex<Vec<NotificationPayload>>,
    fail: bool,
}

impl RecordingSink {
    pub fn failing() -> Self {
        Self {
            delivered: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn delivered(&self) -> Vec<NotificationPayload> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl WebhookSink for RecordingSink {
    async fn deliver(&self, payload: &NotificationPayload) -> Result<(), NotifierError> {
        if self.fail {
            return Err(NotifierError::WebhookDelivery("sink closed".to_string()));
        }

        self.delivered.lock().unwrap().push(payload.clone());
        Ok(())
    }
}
