use std::fmt::{Display, Formatter, Result};

use serde::{Serialize, Serializer};

/// Statuses that trigger a resource breakdown in the notification.
pub const DESCRIBE_STACK_STATUSES: [&str; 2] = ["CREATE_COMPLETE", "DELETE_IN_PROGRESS"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentColor {
    Good,
    Warning,
    Danger,
    Neutral,
}

impl AttachmentColor {
    /// Maps a CloudFormation stack status to its attachment color. Unknown statuses
    /// fall back to neutral so new statuses still render.
    pub fn for_status(status: &str) -> Self {
        match status {
            "CREATE_COMPLETE"
            | "CREATE_IN_PROGRESS"
            | "DELETE_COMPLETE"
            | "DELETE_IN_PROGRESS"
            | "UPDATE_COMPLETE"
            | "UPDATE_COMPLETE_CLEANUP_IN_PROGRESS"
            | "UPDATE_IN_PROGRESS" => AttachmentColor::Good,
            "ROLLBACK_COMPLETE"
            | "ROLLBACK_IN_PROGRESS"
            | "UPDATE_ROLLBACK_COMPLETE"
            | "UPDATE_ROLLBACK_COMPLETE_CLEANUP_IN_PROGRESS"
            | "UPDATE_ROLLBACK_IN_PROGRESS" => AttachmentColor::Warning,
            "CREATE_FAILED" | "DELETE_FAILED" | "ROLLBACK_FAILED" | "UPDATE_ROLLBACK_FAILED" => {
                AttachmentColor::Danger
            }
            _ => AttachmentColor::Neutral,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttachmentColor::Good => "good",
            AttachmentColor::Warning => "warning",
            AttachmentColor::Danger => "danger",
            AttachmentColor::Neutral => "#000000",
        }
    }
}

impl Display for AttachmentColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for AttachmentColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

pub fn is_describe_worthy(status: &str) -> bool {
    DESCRIBE_STACK_STATUSES.contains(&status)
}
