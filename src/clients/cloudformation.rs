use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_cloudformation::{
    Client, error::DisplayErrorContext,
    operation::describe_stack_resources::DescribeStackResourcesOutput,
};
use tracing::{debug, info};

use crate::{error::NotifierError, models::resource::ResourceRecord};

/// Lookup of the resources currently belonging to a stack.
#[async_trait]
pub trait StackInventory: Send + Sync {
    async fn stack_resources(&self, stack_name: &str) -> Result<Vec<ResourceRecord>, NotifierError>;
}

#[derive(Debug, Clone)]
pub struct CloudFormationClient {
    client: Client,
}

impl CloudFormationClient {
    /// Builds a client from the default AWS environment (region, credentials).
    pub async fn from_env() -> Self {
        let config = aws_config::defaults(BehaviorVersion::latest()).load().await;

        info!(
            region = ?config.region(),
            "CloudFormation client initialized"
        );

        Self::new(Client::new(&config))
    }

    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

/// Converts a `DescribeStackResources` response into inventory records. A resource
/// without a type cannot be counted, so the whole response is rejected.
pub fn records_from_output(
    output: &DescribeStackResourcesOutput,
) -> Result<Vec<ResourceRecord>, NotifierError> {
    output
        .stack_resources()
        .iter()
        .map(|resource| {
            resource.resource_type().map(ResourceRecord::new).ok_or_else(|| {
                NotifierError::InventoryUnavailable(format!(
                    "resource '{}' has no type",
                    resource.logical_resource_id().unwrap_or("unknown")
                ))
            })
        })
        .collect()
}

#[async_trait]
impl StackInventory for CloudFormationClient {
    async fn stack_resources(&self, stack_name: &str) -> Result<Vec<ResourceRecord>, NotifierError> {
        debug!(stack_name, "Describing stack resources");

        let output = self
            .client
            .describe_stack_resources()
            .stack_name(stack_name)
            .send()
            .await
            .map_err(|e| NotifierError::InventoryUnavailable(DisplayErrorContext(&e).to_string()))?;

        let resources = records_from_output(&output)?;

        debug!(stack_name, resource_count = resources.len(), "Stack resources described");

        Ok(resources)
    }
}
