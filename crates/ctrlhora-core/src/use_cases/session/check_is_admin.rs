use async_trait::async_trait;
use ctrlhora_api_interface::ApiError;
use shaku::{Component, Interface};

use crate::CoreContext;

/// Probe the admin endpoints with a token.
///
/// The API has no role endpoint: listing users only works for administrators.
#[cfg_attr(any(test, feature = "testkit"), mockall::automock)]
#[async_trait]
pub trait CheckIsAdminInterface: Interface {
    async fn run<'a>(&self, ctx: &CoreContext<'a>, token: &str) -> bool;
}

#[derive(Component)]
#[shaku(interface = CheckIsAdminInterface)]
pub(crate) struct CheckIsAdmin;

#[async_trait]
impl CheckIsAdminInterface for CheckIsAdmin {
    #[tracing::instrument(skip(self, ctx, token), ret)]
    async fn run<'a>(&self, ctx: &CoreContext<'a>, token: &str) -> bool {
        match ctx.api_service.users_list(token).await {
            // Only the status matters.
            Ok(_) | Err(ApiError::InvalidResponse { .. }) => true,
            Err(e) => {
                tracing::debug!(error = %e, "Admin probe refused");
                false
            }
        }
    }
}
