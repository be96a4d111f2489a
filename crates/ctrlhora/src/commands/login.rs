use async_trait::async_trait;
use clap::Parser;
use ctrlhora_core::use_cases::session::login::Login;

use super::{Command, CommandContext};
use crate::Result;

/// Log in and store the session
#[derive(Parser)]
pub(crate) struct LoginCommand {
    /// Username
    username: String,
    /// Password
    #[arg(long, env = "CTRLHORA_PASSWORD", hide_env_values = true)]
    password: String,
}

#[async_trait]
impl Command for LoginCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        let session = Login
            .run(&ctx.as_core_context(), &self.username, &self.password)
            .await?;

        writeln!(ctx.writer.write().await, "Login successful.")?;
        if session.is_admin {
            writeln!(ctx.writer.write().await, "Administrator session.")?;
        }

        Ok(())
    }
}
