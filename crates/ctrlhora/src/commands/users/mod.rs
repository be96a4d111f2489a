use async_trait::async_trait;
use clap::{Parser, Subcommand};
use ctrlhora_models::User;

use self::{
    create::UsersCreateCommand, delete::UsersDeleteCommand, list::UsersListCommand,
    update::UsersUpdateCommand,
};
use crate::{
    commands::{Command, CommandContext},
    Result,
};

mod create;
mod delete;
mod list;
mod update;

/// Administer users (administrator session required)
#[derive(Parser)]
pub(crate) struct UsersCommand {
    #[clap(subcommand)]
    inner: UsersSubCommand,
}

#[async_trait]
impl Command for UsersCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        self.inner.execute(ctx).await
    }
}

#[derive(Subcommand)]
enum UsersSubCommand {
    List(UsersListCommand),
    Create(UsersCreateCommand),
    Update(UsersUpdateCommand),
    Delete(UsersDeleteCommand),
}

#[async_trait]
impl Command for UsersSubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::List(sub) => sub.run(ctx).await,
            Self::Create(sub) => sub.run(ctx).await,
            Self::Update(sub) => sub.run(ctx).await,
            Self::Delete(sub) => sub.run(ctx).await,
        }
    }
}

async fn write_users(ctx: &CommandContext, users: &[User]) -> Result<()> {
    let mut writer = ctx.writer.write().await;

    if users.is_empty() {
        writeln!(writer, "No user found.")?;
    } else {
        writeln!(writer, "Users:")?;
        for user in users {
            writeln!(
                writer,
                "- {} (admin: {})",
                user.username,
                if user.is_admin { "yes" } else { "no" }
            )?;
        }
    }

    Ok(())
}
