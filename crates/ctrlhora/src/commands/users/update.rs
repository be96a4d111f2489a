use anyhow::anyhow;
use clap::Parser;
use ctrlhora_core::use_cases::users::{update_user::UpdateUser, ListUsersInterface};
use ctrlhora_models::UserUpdate;
use shaku::HasComponent;

use super::write_users;
use crate::{commands::CommandContext, Result};

/// Update a user password or administrator rights
#[derive(Parser)]
pub(crate) struct UsersUpdateCommand {
    /// Username
    username: String,
    /// New password, unchanged when omitted or empty
    #[arg(long)]
    password: Option<String>,
    /// Administrator rights, unchanged when omitted
    #[arg(long)]
    admin: Option<bool>,
}

impl UsersUpdateCommand {
    pub async fn run(self, ctx: CommandContext) -> Result<()> {
        let core_ctx = ctx.as_core_context();

        let is_admin = match self.admin {
            Some(is_admin) => is_admin,
            None => {
                let list_users: &dyn ListUsersInterface = ctx.core_module.resolve_ref();
                list_users
                    .run(&core_ctx)
                    .await?
                    .into_iter()
                    .find(|u| u.username == self.username)
                    .map(|u| u.is_admin)
                    .ok_or_else(|| anyhow!("Unknown user '{}'.", self.username))?
            }
        };

        let update = UserUpdate {
            username: self.username.clone(),
            password: self.password.filter(|p| !p.is_empty()),
            is_admin,
        };

        let users = UpdateUser
            .run(&core_ctx, &self.username, &update)
            .await?;

        writeln!(ctx.writer.write().await, "User updated successfully.")?;
        write_users(&ctx, &users).await
    }
}

#[cfg(test)]
mod tests {
    use ctrlhora_api_interface::{types::ApiMessage, MockApiService};
    use ctrlhora_models::{User, UserUpdate};
    use pretty_assertions::assert_eq;

    use crate::testutils::{test_command, test_command_error, CommandContextTest};

    fn users(carol_is_admin: bool) -> Vec<User> {
        vec![
            User {
                username: "root".into(),
                is_admin: true,
                ..Default::default()
            },
            User {
                username: "carol".into(),
                is_admin: carol_is_admin,
                ..Default::default()
            },
        ]
    }

    #[tokio::test]
    async fn run_with_admin_flag() {
        let mut ctx = CommandContextTest::with_session("root", true);
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_users_update()
                .once()
                .withf(|token, username, update| {
                    token == "root-token"
                        && username == "carol"
                        && *update
                            == UserUpdate {
                                username: "carol".into(),
                                password: Some("new".into()),
                                is_admin: true,
                            }
                })
                .return_once(|_, _, _| Ok(ApiMessage::new("User updated")));
            svc.expect_users_list()
                .once()
                .return_once(|_| Ok(users(true)));
            svc
        };

        assert_eq!(
            test_command(
                ctx,
                &["users", "update", "carol", "--password", "new", "--admin", "true"]
            )
            .await,
            "User updated successfully.\nUsers:\n- root (admin: yes)\n- carol (admin: yes)\n"
        );
    }

    #[tokio::test]
    async fn run_keeps_current_admin_flag() {
        let mut ctx = CommandContextTest::with_session("root", true);
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_users_list()
                .times(2)
                .returning(|_| Ok(users(true)));
            svc.expect_users_update()
                .once()
                .withf(|_, _, update| update.is_admin && update.password.is_none())
                .return_once(|_, _, _| Ok(ApiMessage::new("User updated")));
            svc
        };

        assert_eq!(
            test_command(ctx, &["users", "update", "carol", "--password", ""]).await,
            "User updated successfully.\nUsers:\n- root (admin: yes)\n- carol (admin: yes)\n"
        );
    }

    #[tokio::test]
    async fn run_unknown_user() {
        let mut ctx = CommandContextTest::with_session("root", true);
        ctx.api_service = {
            let mut svc = MockApiService::new();
            svc.expect_users_list()
                .once()
                .return_once(|_| Ok(users(false)));
            svc
        };

        assert_eq!(
            test_command_error(ctx, &["users", "update", "ghost"]).await,
            "Unknown user 'ghost'."
        );
    }
}
