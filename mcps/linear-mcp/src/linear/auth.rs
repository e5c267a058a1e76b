//! API-key authentication for Linear

use super::error::{LinearError, LinearResult};
use crate::config::LinearConfig;

/// Source of credentials for Linear requests
pub trait LinearAuthProvider: Send + Sync {
    fn is_authenticated(&self) -> bool;

    /// Value for the `Authorization` header
    fn authorization(&self) -> LinearResult<String>;
}

/// Personal API key auth
///
/// Linear expects the raw key in `Authorization`, without a `Bearer` prefix.
#[derive(Clone)]
pub struct LinearAuth {
    api_key: Option<String>,
}

impl LinearAuth {
    pub fn new(api_key: impl Into<String>) -> Self {
        let key = api_key.into();
        let key = key.trim();
        Self {
            api_key: (!key.is_empty()).then(|| key.to_string()),
        }
    }

    pub fn from_config(config: &LinearConfig) -> Self {
        Self::new(config.api_key.as_str())
    }
}

impl LinearAuthProvider for LinearAuth {
    fn is_authenticated(&self) -> bool {
        self.api_key.is_some()
    }

    fn authorization(&self) -> LinearResult<String> {
        self.api_key.clone().ok_or(LinearError::NotAuthenticated)
    }
}
