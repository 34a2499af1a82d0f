use std::collections::BTreeMap;

use crate::error::NotifierError;

pub const STACK_RESOURCE_TYPE: &str = "AWS::CloudFormation::Stack";

pub const RESOURCE_TYPE: &str = "ResourceType";
pub const RESOURCE_STATUS: &str = "ResourceStatus";
pub const STACK_NAME: &str = "StackName";
pub const STACK_ID: &str = "StackId";
pub const TIMESTAMP: &str = "Timestamp";

/// Event properties copied verbatim into the status attachment, in display order.
pub const DISPLAYED_PROPERTIES: [&str; 2] = [TIMESTAMP, STACK_NAME];

/// Key/value fields decoded from a CloudFormation SNS message. Values are kept as
/// the raw strings CloudFormation sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackEvent {
    fields: BTreeMap<String, String>,
}

impl StackEvent {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn require(&self, key: &str) -> Result<&str, NotifierError> {
        self.get(key).ok_or_else(|| NotifierError::missing_field(key))
    }

    pub fn resource_type(&self) -> Result<&str, NotifierError> {
        self.require(RESOURCE_TYPE)
    }

    pub fn resource_status(&self) -> Result<&str, NotifierError> {
        self.require(RESOURCE_STATUS)
    }

    pub fn stack_name(&self) -> Result<&str, NotifierError> {
        self.require(STACK_NAME)
    }

    pub fn stack_id(&self) -> Result<&str, NotifierError> {
        self.require(STACK_ID)
    }

    /// Whether the event concerns the stack as a whole rather than one of its
    /// resources. An event without a resource type is malformed.
    pub fn is_stack_event(&self) -> Result<bool, NotifierError> {
        Ok(self.resource_type()? == STACK_RESOURCE_TYPE)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for StackEvent {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
