use ctrlhora_models::Session;

use crate::{CoreContext, Result};

pub struct GetSession;

impl GetSession {
    #[tracing::instrument(skip(self, ctx))]
    pub async fn run(&self, ctx: &CoreContext<'_>) -> Result<Option<Session>> {
        ctx.session_store.session_load().await.map_err(Into::into)
    }
}
