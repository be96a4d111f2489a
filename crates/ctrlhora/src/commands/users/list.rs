use clap::Parser;
use ctrlhora_core::use_cases::users::ListUsersInterface;
use shaku::HasComponent;

use super::write_users;
use crate::{commands::CommandContext, Result};

/// List users
#[derive(Parser)]
pub(crate) struct UsersListCommand;

impl UsersListCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let list_users: &dyn ListUsersInterface = ctx.core_module.resolve_ref();
        let users = list_users.run(&ctx.as_core_context()).await?;

        write_users(&ctx, &users).await
    }
}
