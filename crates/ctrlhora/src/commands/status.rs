use async_trait::async_trait;
use clap::Parser;
use ctrlhora_core::use_cases::session::get_session::GetSession;

use super::{Command, CommandContext};
use crate::Result;

/// Show the stored session
#[derive(Parser)]
pub(crate) struct StatusCommand;

#[async_trait]
impl Command for StatusCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match GetSession.run(&ctx.as_core_context()).await? {
            Some(session) => writeln!(
                ctx.writer.write().await,
                "Logged in as '{}' ({}).",
                session.username,
                session.role()
            )?,
            None => writeln!(ctx.writer.write().await, "Not logged in.")?,
        }

        Ok(())
    }
}
