use async_trait::async_trait;
use ctrlhora_models::User;
use shaku::{Component, Interface};

use crate::{
    use_cases::session::require_session::RequireSession, CoreContext, DomainError, Result,
    UserAction,
};

#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait ListUsersInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<Vec<User>>;
}

#[derive(Component)]
#[shaku(interface = ListUsersInterface)]
pub(crate) struct ListUsers;

#[async_trait]
impl ListUsersInterface for ListUsers {
    #[tracing::instrument(skip(self, ctx))]
    async fn run<'a>(&self, ctx: &CoreContext<'a>) -> Result<Vec<User>> {
        let session = RequireSession.run(ctx).await?;

        ctx.api_service
            .users_list(&session.access_token)
            .await
            .map_err(|e| DomainError::UserAdministrationFailed {
                action: UserAction::List,
                source: e,
            })
    }
}
