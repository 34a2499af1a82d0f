use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifierError {
    #[error("Malformed stack message: {0}")]
    MalformedMessage(String),

    #[error("Stack inventory unavailable: {0}")]
    InventoryUnavailable(String),

    #[error("Could not extract region from stack id '{0}'")]
    RegionExtraction(String),

    #[error("Webhook delivery failed: {0}")]
    WebhookDelivery(String),
}

impl NotifierError {
    pub fn missing_field(key: &str) -> Self {
        NotifierError::MalformedMessage(format!("missing required field '{}'", key))
    }
}
