//! Linear API access
//!
//! Auth, the GraphQL client, and the [`IssueUpdater`] capability that
//! handlers depend on.

pub mod auth;
pub mod client;
pub mod error;
pub mod types;

pub use auth::{LinearAuth, LinearAuthProvider};
pub use client::LinearGraphQLClient;
pub use error::{LinearError, LinearResult};
pub use types::{IssueSummary, IssueUpdateInput, IssueUpdatePayload, IssueUpdateResponse};

use async_trait::async_trait;

/// Capability to apply an update to a single issue
///
/// Implemented by [`LinearGraphQLClient`]; handlers only see this trait so
/// tests can substitute a fake.
#[async_trait]
pub trait IssueUpdater: Send + Sync {
    async fn update_issue(
        &self,
        id: &str,
        input: &IssueUpdateInput,
    ) -> LinearResult<IssueUpdateResponse>;
}
