use ctrlhora_models::{User, UserUpdate};
use shaku::HasComponent;

use super::ListUsersInterface;
use crate::{
    use_cases::session::require_session::RequireSession, CoreContext, DomainError, Result,
    UserAction,
};

pub struct UpdateUser;

impl UpdateUser {
    /// Update a user, then return the refreshed list.
    #[tracing::instrument(skip(self, ctx, update), fields(is_admin = update.is_admin, password_changed = update.password.is_some()))]
    pub async fn run(
        &self,
        ctx: &CoreContext<'_>,
        username: &str,
        update: &UserUpdate,
    ) -> Result<Vec<User>> {
        let session = RequireSession.run(ctx).await?;

        ctx.api_service
            .users_update(&session.access_token, username, update)
            .await
            .map_err(|e| DomainError::UserAdministrationFailed {
                action: UserAction::Update,
                source: e,
            })?;

        let list_users: &dyn ListUsersInterface = ctx.core_module.resolve_ref();
        list_users.run(ctx).await
    }
}
