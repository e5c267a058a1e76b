//! Builders for `CallToolResult` responses

use rmcp::model::{CallToolResult, Content};

/// Successful response holding exactly one text block
pub fn text_success(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Text of the first content block, if it is text
pub fn first_text(result: &CallToolResult) -> Option<&str> {
    result.content.first().and_then(|c| match &c.raw {
        rmcp::model::RawContent::Text(t) => Some(t.text.as_str()),
        _ => None,
    })
}
