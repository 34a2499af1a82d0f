use tracing::debug;

use crate::{
    clients::cloudformation::StackInventory,
    console::stack_console_url,
    error::NotifierError,
    models::{
        slack::{Attachment, AttachmentField, ICON_EMOJI, NotificationPayload, USERNAME},
        stack_event::{DISPLAYED_PROPERTIES, StackEvent},
        status::{AttachmentColor, is_describe_worthy},
    },
    summary::stack_summary_attachment,
};

/// Builds the chat message for a stack-level event. A resource breakdown is
/// fetched and attached for statuses listed in `DESCRIBE_STACK_STATUSES`.
pub async fn build_stack_update_message(
    event: &StackEvent,
    inventory: &dyn StackInventory,
    channel: Option<&str>,
) -> Result<NotificationPayload, NotifierError> {
    let stack_name = event.stack_name()?;
    let status = event.resource_status()?;

    let mut attachments = vec![stack_update_attachment(event)?];

    if is_describe_worthy(status) {
        debug!(stack_name, status, "Status requires resource breakdown");
        attachments.push(stack_summary_attachment(inventory, stack_name).await?);
    }

    let stack_url = stack_console_url(event.stack_id()?)?;

    Ok(NotificationPayload {
        icon_emoji: ICON_EMOJI.to_string(),
        username: USERNAME.to_string(),
        text: format!(
            "Stack: {} has entered status: {} <{}|(view in web console)>",
            stack_name, status, stack_url
        ),
        attachments,
        channel: channel.map(str::to_string),
    })
}

pub fn stack_update_attachment(event: &StackEvent) -> Result<Attachment, NotifierError> {
    let status = event.resource_status()?;
    let title = format!("Stack {} is now status {}", event.stack_name()?, status);

    let fields = DISPLAYED_PROPERTIES
        .iter()
        .filter_map(|key| event.get(key).map(|value| AttachmentField::short(*key, value)))
        .collect();

    Ok(Attachment::titled(title)
        .with_fields(fields)
        .with_color(AttachmentColor::for_status(status)))
}
