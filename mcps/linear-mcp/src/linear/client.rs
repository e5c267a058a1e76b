//! GraphQL client for the Linear API
//!
//! All requests go through [`LinearGraphQLClient::graphql`], which attaches
//! the auth header and turns HTTP and GraphQL failures into [`LinearError`].

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, instrument, warn};

use super::auth::LinearAuthProvider;
use super::error::{LinearError, LinearResult};
use super::types::{IssueSummary, IssueUpdateInput, IssueUpdateResponse};
use super::IssueUpdater;
use crate::config::LinearConfig;

const ISSUE_UPDATE_MUTATION: &str = r#"
    mutation IssueUpdate($id: String!, $input: IssueUpdateInput!) {
        issueUpdate(id: $id, input: $input) {
            success
            issue {
                id
                identifier
                title
                url
            }
        }
    }
"#;

/// Longest raw error body kept in [`LinearError::Status`]
const MAX_ERROR_BODY_CHARS: usize = 512;

/// Linear GraphQL client
pub struct LinearGraphQLClient {
    client: reqwest::Client,
    endpoint: String,
    auth: Arc<dyn LinearAuthProvider>,
}

impl LinearGraphQLClient {
    pub fn new(config: &LinearConfig, auth: Arc<dyn LinearAuthProvider>) -> LinearResult<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("linear-mcp/", env!("CARGO_PKG_VERSION")))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            endpoint: config.api_url.clone(),
            auth,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Run a query or mutation and decode its `data`
    pub async fn graphql<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> LinearResult<T> {
        let authorization = self.auth.authorization()?;

        debug!(endpoint = %self.endpoint, "sending Linear GraphQL request");

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, authorization)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "Linear API returned an error status");

            // Validation failures come back as 400 with a GraphQL `errors` array.
            if let Some(message) = serde_json::from_str::<Value>(&body)
                .ok()
                .as_ref()
                .and_then(first_graphql_error)
            {
                return Err(LinearError::GraphQL(message));
            }

            return Err(LinearError::Status {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let body: Value = response.json().await?;
        decode_data(body)
    }
}

/// Message of the first entry in a non-empty `errors` array
fn first_graphql_error(body: &Value) -> Option<String> {
    let errors = body
        .get("errors")
        .and_then(Value::as_array)
        .filter(|errors| !errors.is_empty())?;
    let first = errors
        .first()
        .and_then(|e| e.get("message"))
        .and_then(Value::as_str)
        .unwrap_or("unknown error");
    warn!(error_count = errors.len(), first = %first, "Linear GraphQL errors");
    Some(first.to_string())
}

fn truncate_body(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        return body.to_string();
    }
    let mut truncated: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
    truncated.push_str("...");
    truncated
}

/// Pull `data` out of a GraphQL response body, surfacing `errors` first
fn decode_data<T: DeserializeOwned>(mut body: Value) -> LinearResult<T> {
    if let Some(message) = first_graphql_error(&body) {
        return Err(LinearError::GraphQL(message));
    }

    match body.get_mut("data").map(Value::take) {
        Some(data) if !data.is_null() => Ok(serde_json::from_value(data)?),
        _ => Err(LinearError::MissingData),
    }
}

// The API echoes back a single nullable `issue`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IssueUpdateData {
    issue_update: IssueUpdateWire,
}

#[derive(Debug, Deserialize)]
struct IssueUpdateWire {
    success: bool,
    issue: Option<IssueSummary>,
}

#[async_trait]
impl IssueUpdater for LinearGraphQLClient {
    #[instrument(skip(self, input), fields(issue_id = %id, state_id = %input.state_id))]
    async fn update_issue(
        &self,
        id: &str,
        input: &IssueUpdateInput,
    ) -> LinearResult<IssueUpdateResponse> {
        let data: IssueUpdateData = self
            .graphql(ISSUE_UPDATE_MUTATION, json!({ "id": id, "input": input }))
            .await?;

        let payload = data.issue_update;
        Ok(IssueUpdateResponse::new(
            payload.success,
            payload.issue.into_iter().collect(),
        ))
    }
}
