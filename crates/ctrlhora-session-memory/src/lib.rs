//! In-memory session storage, for tests and one-shot runs.

use async_trait::async_trait;
use ctrlhora_models::Session;
use ctrlhora_session_interface::{Result, SessionStore};
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    session: RwLock<Option<Session>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_session(session: Session) -> Self {
        Self {
            session: RwLock::new(Some(session)),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn session_load(&self) -> Result<Option<Session>> {
        Ok(self.session.read().await.clone())
    }

    async fn session_save(&self, session: &Session) -> Result<()> {
        *self.session.write().await = Some(session.clone());
        Ok(())
    }

    async fn session_clear(&self) -> Result<()> {
        self.session.write().await.take();
        Ok(())
    }
}
