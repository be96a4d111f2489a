use ctrlhora_models::Session;

use super::get_session::GetSession;
use crate::{CoreContext, DomainError, Result};

pub struct RequireSession;

impl RequireSession {
    #[tracing::instrument(skip(self, ctx))]
    pub async fn run(&self, ctx: &CoreContext<'_>) -> Result<Session> {
        GetSession
            .run(ctx)
            .await?
            .ok_or(DomainError::NotLoggedIn)
    }
}
