use ctrlhora_models::Session;
use shaku::HasComponent;

use super::CheckIsAdminInterface;
use crate::{CoreContext, DomainError, Result};

pub struct Login;

impl Login {
    /// Exchange credentials for a token, then store the session.
    ///
    /// A failed login leaves the stored session untouched.
    #[tracing::instrument(skip(self, ctx, password))]
    pub async fn run(
        &self,
        ctx: &CoreContext<'_>,
        username: &str,
        password: &str,
    ) -> Result<Session> {
        let response = ctx
            .api_service
            .login(username, password)
            .await
            .map_err(|e| DomainError::LoginFailed { source: e })?;

        let check_is_admin: &dyn CheckIsAdminInterface = ctx.core_module.resolve_ref();
        let is_admin = check_is_admin.run(ctx, &response.access_token).await;

        let session = Session {
            access_token: response.access_token,
            token_type: response.token_type,
            username: username.into(),
            is_admin,
        };
        ctx.session_store.session_save(&session).await?;

        tracing::info!(username, is_admin, "Logged in");
        Ok(session)
    }
}
