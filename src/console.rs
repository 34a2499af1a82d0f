use std::sync::LazyLock;

use regex::Regex;
use url::form_urlencoded;

use crate::error::NotifierError;

static STACK_REGION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^arn:aws:cloudformation:(?P<region>[a-z]{2}-[a-z]{4,9}-[1-2])")
        .expect("stack region pattern is valid")
});

pub fn stack_region(stack_id: &str) -> Result<&str, NotifierError> {
    STACK_REGION
        .captures(stack_id)
        .and_then(|captures| captures.name("region"))
        .map(|region| region.as_str())
        .ok_or_else(|| NotifierError::RegionExtraction(stack_id.to_string()))
}

/// Link to the stack's event tab in the CloudFormation console.
pub fn stack_console_url(stack_id: &str) -> Result<String, NotifierError> {
    let region = stack_region(stack_id)?;

    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("filter", "active")
        .append_pair("tab", "events")
        .append_pair("stackId", stack_id)
        .finish();

    Ok(format!(
        "https://{region}.console.aws.amazon.com/cloudformation/home?region={region}#/stacks?{query}"
    ))
}
