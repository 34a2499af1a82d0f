use tracing::{info, warn};

use crate::{
    clients::cloudformation::StackInventory,
    error::NotifierError,
    models::{
        resource::ResourceBreakdown,
        slack::{Attachment, AttachmentField},
    },
};

pub async fn summarize_stack(
    inventory: &dyn StackInventory,
    stack_name: &str,
) -> Result<ResourceBreakdown, NotifierError> {
    let resources = inventory
        .stack_resources(stack_name)
        .await
        .inspect_err(|e| warn!(stack_name, error = %e, "Stack inventory lookup failed"))?;

    let breakdown = ResourceBreakdown::from_records(&resources);

    info!(
        stack_name,
        total = breakdown.total,
        resource_types = breakdown.counts.len(),
        "Stack resources summarized"
    );

    Ok(breakdown)
}

pub fn summary_attachment(breakdown: &ResourceBreakdown) -> Attachment {
    let fields = breakdown
        .counts
        .iter()
        .map(|(resource_type, count)| {
            AttachmentField::short(format!("Type {}", resource_type), format!("Total {}", count))
        })
        .collect();

    Attachment::titled(format!("Breakdown of all {} resources", breakdown.total))
        .with_fields(fields)
}

pub async fn stack_summary_attachment(
    inventory: &dyn StackInventory,
    stack_name: &str,
) -> Result<Attachment, NotifierError> {
    let breakdown = summarize_stack(inventory, stack_name).await?;
    Ok(summary_attachment(&breakdown))
}
