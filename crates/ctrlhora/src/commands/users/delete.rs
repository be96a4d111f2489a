use clap::Parser;
use ctrlhora_core::use_cases::users::delete_user::DeleteUser;

use super::write_users;
use crate::{commands::CommandContext, Result};

/// Delete a user
#[derive(Parser)]
pub(crate) struct UsersDeleteCommand {
    /// Username
    username: String,
    /// Confirm the deletion
    #[arg(long)]
    yes: bool,
}

impl UsersDeleteCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        if !self.yes {
            writeln!(
                ctx.writer.write().await,
                "Deletion of '{}' not confirmed, use --yes.",
                self.username
            )?;
            return Ok(());
        }

        let users = DeleteUser
            .run(&ctx.as_core_context(), &self.username)
            .await?;

        writeln!(ctx.writer.write().await, "User deleted successfully.")?;
        write_users(&ctx, &users).await
    }
}

#[cfg(test)]
mod tests {
    use ctrlhora_api_interface::{types::ApiMessage, ApiError, MockApiService};
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, test_command_error, CommandContextTest};

    #[tokio::test]
    async fn run_not_confirmed() {
        let ctx = CommandContextTest::with_session("root", true);

        assert_eq!(
            test_command(ctx, &["users", "delete", "carol"]).await,
            "Deletion of 'carol' not confirmed, use --yes.\n"
        );
    }

    #[tokio::test]
    async fn run() {
        let mut ctx = CommandContextTest::with_session("root", true);
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_users_delete()
                .once()
                .withf(|token, username| token == "root-token" && username == "carol")
                .return_once(|_, _| Ok(ApiMessage::new("User deleted")));
            svc.expect_users_list().once().return_once(|_| Ok(vec![]));
            svc
        };

        assert_eq!(
            test_command(ctx, &["users", "delete", "carol", "--yes"]).await,
            "User deleted successfully.\nNo user found.\n"
        );
    }

    #[tokio::test]
    async fn run_unknown_user() {
        let mut ctx = CommandContextTest::with_session("root", true);
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_users_delete().once().return_once(|_, _| {
                Err(ApiError::UnexpectedStatus {
                    status: 404,
                    detail: "User not found".into(),
                })
            });
            svc
        };

        assert_eq!(
            test_command_error(ctx, &["users", "delete", "ghost", "--yes"]).await,
            "Could not delete user: server responded with status 404: User not found"
        );
    }
}
