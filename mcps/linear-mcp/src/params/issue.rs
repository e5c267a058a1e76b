//! Issue-related parameter types

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Parameters for moving an issue to another workflow state
///
/// Both fields are optional on the wire so a missing one is reported as a
/// missing parameter by the handler rather than as a decode failure. The
/// published schema still lists both as required.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[schemars(extend("required" = ["id", "stateId"]))]
pub struct UpdateIssueStatusParams {
    #[schemars(description = "Issue ID or identifier (e.g., 'ENG-123')")]
    pub id: Option<String>,

    #[schemars(description = "ID of the workflow state to move the issue to")]
    pub state_id: Option<String>,
}

impl UpdateIssueStatusParams {
    pub fn new(id: impl Into<String>, state_id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            state_id: Some(state_id.into()),
        }
    }
}
