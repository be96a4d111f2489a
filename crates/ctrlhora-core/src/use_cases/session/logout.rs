use crate::{CoreContext, Result};

pub struct Logout;

impl Logout {
    #[tracing::instrument(skip(self, ctx))]
    pub async fn run(&self, ctx: &CoreContext<'_>) -> Result<()> {
        ctx.session_store.session_clear().await.map_err(Into::into)
    }
}
