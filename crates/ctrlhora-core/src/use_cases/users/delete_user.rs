use ctrlhora_models::User;
use shaku::HasComponent;

use super::ListUsersInterface;
use crate::{
    use_cases::session::require_session::RequireSession, CoreContext, DomainError, Result,
    UserAction,
};

pub struct DeleteUser;

impl DeleteUser {
    /// Delete a user, then return the refreshed list.
    #[tracing::instrument(skip(self, ctx))]
    pub async fn run(&self, ctx: &CoreContext<'_>, username: &str) -> Result<Vec<User>> {
        let session = RequireSession.run(ctx).await?;

        ctx.api_service
            .users_delete(&session.access_token, username)
            .await
            .map_err(|e| DomainError::UserAdministrationFailed {
                action: UserAction::Delete,
                source: e,
            })?;

        let list_users: &dyn ListUsersInterface = ctx.core_module.resolve_ref();
        list_users.run(ctx).await
    }
}
