use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceRecord {
    #[serde(rename = "ResourceType")]
    pub resource_type: String,
}

impl ResourceRecord {
    pub fn new(resource_type: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
        }
    }
}

/// Resource counts per type for one stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourceBreakdown {
    pub total: usize,
    pub counts: BTreeMap<String, usize>,
}

impl ResourceBreakdown {
    /// Groups records by type. Records are sorted first so that each type forms
    /// exactly one run, whatever order the inventory returned them in.
    pub fn from_records(records: &[ResourceRecord]) -> Self {
        let mut types: Vec<&str> = records.iter().map(|r| r.resource_type.as_str()).collect();
        types.sort_unstable();

        let counts = types
            .chunk_by(|a, b| a == b)
            .map(|group| (group[0].to_string(), group.len()))
            .collect();

        Self {
            total: records.len(),
            counts,
        }
    }
}
