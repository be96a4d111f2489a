use async_trait::async_trait;
use clap::Parser;
use ctrlhora_core::use_cases::session::logout::Logout;

use super::{Command, CommandContext};
use crate::Result;

/// Forget the stored session
#[derive(Parser)]
pub(crate) struct LogoutCommand;

#[async_trait]
impl Command for LogoutCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        Logout.run(&ctx.as_core_context()).await?;
        writeln!(ctx.writer.write().await, "Logged out.")?;

        Ok(())
    }
}
