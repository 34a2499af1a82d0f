use serde::Serialize;

use crate::models::status::AttachmentColor;

pub const ICON_EMOJI: &str = ":cloud:";
pub const USERNAME: &str = "cf-bot";

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NotificationPayload {
    pub icon_emoji: String,
    pub username: String,
    pub text: String,
    pub attachments: Vec<Attachment>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Attachment {
    pub fallback: String,
    pub title: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<AttachmentField>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<AttachmentColor>,
}

impl Attachment {
    /// Attachment whose fallback text repeats the title.
    pub fn titled(title: String) -> Self {
        Self {
            fallback: title.clone(),
            title,
            fields: None,
            color: None,
        }
    }

    pub fn with_fields(mut self, fields: Vec<AttachmentField>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn with_color(mut self, color: AttachmentColor) -> Self {
        self.color = Some(color);
        self
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AttachmentField {
    pub title: String,
    pub value: String,
    pub short: bool,
}

impl AttachmentField {
    pub fn short(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
            short: true,
        }
    }
}
