//! Issue handler implementations

use std::sync::Arc;

use mcp_common::{text_success, CallToolResult};
use tracing::{info, warn};

use crate::linear::{IssueSummary, IssueUpdateInput, IssueUpdater, LinearAuthProvider, LinearError};
use crate::params::UpdateIssueStatusParams;

use super::{required, HandlerError, HandlerResult};

/// Issue tools, backed by an injected auth provider and updater
#[derive(Clone)]
pub struct IssueHandler {
    auth: Arc<dyn LinearAuthProvider>,
    updater: Arc<dyn IssueUpdater>,
}

impl IssueHandler {
    pub fn new(auth: Arc<dyn LinearAuthProvider>, updater: Arc<dyn IssueUpdater>) -> Self {
        Self { auth, updater }
    }

    fn verify_auth(&self) -> HandlerResult<()> {
        if self.auth.is_authenticated() {
            Ok(())
        } else {
            Err(LinearError::NotAuthenticated.into())
        }
    }

    /// Move an issue to another workflow state
    ///
    /// Arguments are checked before anything else is touched. The
    /// confirmation names the identifier the API returned, which can differ
    /// from the `id` that was sent.
    pub async fn update_issue_status(
        &self,
        params: UpdateIssueStatusParams,
    ) -> HandlerResult<CallToolResult> {
        let id = required(params.id.as_deref(), "id")?;
        let state_id = required(params.state_id.as_deref(), "stateId")?;

        self.verify_auth()?;

        info!(issue_id = id, state_id, "updating issue status");

        let input = IssueUpdateInput {
            state_id: state_id.to_string(),
        };
        let response = self.updater.update_issue(id, &input).await?;

        let Some(issue) = response.updated_issue() else {
            warn!(
                issue_id = id,
                success = response.issue_update.success,
                "issue status update was not applied"
            );
            return Err(HandlerError::UpdateFailed);
        };

        Ok(text_success(status_updated_message(issue)))
    }
}

fn status_updated_message(issue: &IssueSummary) -> String {
    format!(
        "Successfully updated status of issue {}\nTitle: {}\nURL: {}",
        issue.identifier, issue.title, issue.url
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::{IssueUpdateResponse, LinearResult};
    use async_trait::async_trait;
    use mcp_common::first_text;
    use std::sync::Mutex;

    struct FakeAuth {
        authenticated: bool,
    }

    impl LinearAuthProvider for FakeAuth {
        fn is_authenticated(&self) -> bool {
            self.authenticated
        }

        fn authorization(&self) -> LinearResult<String> {
            if self.authenticated {
                Ok("test-key".to_string())
            } else {
                Err(LinearError::NotAuthenticated)
            }
        }
    }

    enum Reply {
        Response(IssueUpdateResponse),
        GraphQLError(&'static str),
    }

    struct FakeUpdater {
        reply: Reply,
        calls: Mutex<Vec<(String, IssueUpdateInput)>>,
    }

    impl FakeUpdater {
        fn new(reply: Reply) -> Arc<Self> {
            Arc::new(Self {
                reply,
                calls: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> Vec<(String, IssueUpdateInput)> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl IssueUpdater for FakeUpdater {
        async fn update_issue(
            &self,
            id: &str,
            input: &IssueUpdateInput,
        ) -> LinearResult<IssueUpdateResponse> {
            self.calls
                .lock()
                .unwrap()
                .push((id.to_string(), input.clone()));
            match &self.reply {
                Reply::Response(r) => Ok(r.clone()),
                Reply::GraphQLError(m) => Err(LinearError::GraphQL(m.to_string())),
            }
        }
    }

    fn test_issue(identifier: &str) -> IssueSummary {
        IssueSummary {
            id: "issue-1".to_string(),
            identifier: identifier.to_string(),
            title: "Test Issue".to_string(),
            url: format!("https://linear.app/test/issue/{}", identifier),
        }
    }

    fn handler(updater: &Arc<FakeUpdater>, authenticated: bool) -> IssueHandler {
        IssueHandler::new(Arc::new(FakeAuth { authenticated }), updater.clone())
    }

    #[tokio::test]
    async fn test_update_issue_status_success() {
        let updater = FakeUpdater::new(Reply::Response(IssueUpdateResponse::new(
            true,
            vec![test_issue("TEST-1")],
        )));

        let result = handler(&updater, true)
            .update_issue_status(UpdateIssueStatusParams::new("TEST-1", "state-2"))
            .await
            .unwrap();

        assert_eq!(
            updater.calls(),
            vec![(
                "TEST-1".to_string(),
                IssueUpdateInput {
                    state_id: "state-2".to_string()
                }
            )]
        );
        assert!(!result.is_error.unwrap_or(false));
        assert_eq!(result.content.len(), 1);
        let text = first_text(&result).unwrap();
        assert!(text.contains("Successfully updated status of issue TEST-1"));
        assert!(text.contains("https://linear.app/test/issue/TEST-1"));
    }

    #[tokio::test]
    async fn test_message_uses_returned_identifier() {
        let updater = FakeUpdater::new(Reply::Response(IssueUpdateResponse::new(
            true,
            vec![test_issue("ENG-42")],
        )));

        let result = handler(&updater, true)
            .update_issue_status(UpdateIssueStatusParams::new("9f1c-uuid", "state-2"))
            .await
            .unwrap();

        assert_eq!(updater.calls()[0].0, "9f1c-uuid");
        let text = first_text(&result).unwrap();
        assert!(text.starts_with("Successfully updated status of issue ENG-42"));
    }

    #[tokio::test]
    async fn test_update_failed() {
        let updater = FakeUpdater::new(Reply::Response(IssueUpdateResponse::new(false, vec![])));

        let err = handler(&updater, true)
            .update_issue_status(UpdateIssueStatusParams::new("TEST-1", "state-2"))
            .await
            .unwrap_err();

        assert!(matches!(err, HandlerError::UpdateFailed));
        assert!(err.to_string().contains("Failed to update issue status"));
        assert_eq!(updater.calls().len(), 1);
    }

    #[tokio::test]
    async fn test_success_without_issues_is_failure() {
        let updater = FakeUpdater::new(Reply::Response(IssueUpdateResponse::new(true, vec![])));

        let err = handler(&updater, true)
            .update_issue_status(UpdateIssueStatusParams::new("TEST-1", "state-2"))
            .await
            .unwrap_err();

        assert!(matches!(err, HandlerError::UpdateFailed));
    }

    #[tokio::test]
    async fn test_missing_state_id() {
        let updater = FakeUpdater::new(Reply::Response(IssueUpdateResponse::new(
            true,
            vec![test_issue("TEST-1")],
        )));
        let params = UpdateIssueStatusParams {
            id: Some("TEST-1".to_string()),
            state_id: None,
        };

        let err = handler(&updater, true)
            .update_issue_status(params)
            .await
            .unwrap_err();

        assert!(err.to_string().contains("Missing required parameter"));
        assert!(updater.calls().is_empty());
    }

    #[tokio::test]
    async fn test_missing_or_blank_id() {
        let updater = FakeUpdater::new(Reply::Response(IssueUpdateResponse::new(true, vec![])));

        for id in [None, Some(String::new()), Some("   ".to_string())] {
            let params = UpdateIssueStatusParams {
                id,
                state_id: Some("state-2".to_string()),
            };
            let err = handler(&updater, true)
                .update_issue_status(params)
                .await
                .unwrap_err();
            assert!(matches!(err, HandlerError::MissingParameter("id")));
        }
        assert!(updater.calls().is_empty());
    }

    #[tokio::test]
    async fn test_validation_precedes_auth() {
        let updater = FakeUpdater::new(Reply::Response(IssueUpdateResponse::new(true, vec![])));

        let err = handler(&updater, false)
            .update_issue_status(UpdateIssueStatusParams::default())
            .await
            .unwrap_err();

        assert!(matches!(err, HandlerError::MissingParameter(_)));
    }

    #[tokio::test]
    async fn test_unauthenticated() {
        let updater = FakeUpdater::new(Reply::Response(IssueUpdateResponse::new(
            true,
            vec![test_issue("TEST-1")],
        )));

        let err = handler(&updater, false)
            .update_issue_status(UpdateIssueStatusParams::new("TEST-1", "state-2"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HandlerError::Linear(LinearError::NotAuthenticated)
        ));
        assert!(err.to_string().contains("LINEAR_API_KEY"));
        assert!(updater.calls().is_empty());
    }

    #[tokio::test]
    async fn test_collaborator_error_propagates() {
        let updater = FakeUpdater::new(Reply::GraphQLError("Entity not found: Issue"));

        let err = handler(&updater, true)
            .update_issue_status(UpdateIssueStatusParams::new("TEST-1", "state-2"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            HandlerError::Linear(LinearError::GraphQL(ref m)) if m == "Entity not found: Issue"
        ));
        assert_eq!(err.to_string(), "Linear API error: Entity not found: Issue");
    }
}
