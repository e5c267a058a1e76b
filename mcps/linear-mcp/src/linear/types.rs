//! Wire types for the `issueUpdate` mutation

use serde::{Deserialize, Serialize};

/// Fields changed by a status update
///
/// Serializes to exactly `{"stateId": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateInput {
    pub state_id: String,
}

/// An issue as echoed back by a mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueSummary {
    pub id: String,
    pub identifier: String,
    pub title: String,
    pub url: String,
}

/// Payload of `issueUpdate`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueUpdatePayload {
    pub success: bool,
    #[serde(default)]
    pub issues: Vec<IssueSummary>,
}

/// Top-level `data` of the `issueUpdate` mutation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueUpdateResponse {
    pub issue_update: IssueUpdatePayload,
}

impl IssueUpdateResponse {
    pub fn new(success: bool, issues: Vec<IssueSummary>) -> Self {
        Self {
            issue_update: IssueUpdatePayload { success, issues },
        }
    }

    /// The updated issue, if the mutation succeeded and echoed one back
    pub fn updated_issue(&self) -> Option<&IssueSummary> {
        if self.issue_update.success {
            self.issue_update.issues.first()
        } else {
            None
        }
    }
}
