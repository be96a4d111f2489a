use async_trait::async_trait;
use ctrlhora_models::Session;

use crate::Result;

/// Persists the current session between runs.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Load the stored session, if any.
    async fn session_load(&self) -> Result<Option<Session>>;
    /// Replace the stored session.
    async fn session_save(&self, session: &Session) -> Result<()>;
    /// Remove the stored session. Clearing an empty store is not an error.
    async fn session_clear(&self) -> Result<()>;
}
