use ctrlhora_models::{NewUser, User};
use shaku::HasComponent;

use super::ListUsersInterface;
use crate::{
    use_cases::session::require_session::RequireSession, CoreContext, DomainError, Result,
    UserAction,
};

pub struct CreateUser;

impl CreateUser {
    /// Create a user, then return the refreshed list.
    #[tracing::instrument(skip(self, ctx, user), fields(username = %user.username, is_admin = user.is_admin))]
    pub async fn run(&self, ctx: &CoreContext<'_>, user: &NewUser) -> Result<Vec<User>> {
        let session = RequireSession.run(ctx).await?;

        ctx.api_service
            .users_create(&session.access_token, user)
            .await
            .map_err(|e| DomainError::UserAdministrationFailed {
                action: UserAction::Create,
                source: e,
            })?;

        let list_users: &dyn ListUsersInterface = ctx.core_module.resolve_ref();
        list_users.run(ctx).await
    }
}
