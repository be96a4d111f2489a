use std::time::Duration;

use async_trait::async_trait;
use clap::Parser;
use ctrlhora_core::clock::{clock_now, format_clock};

use super::{Command, CommandContext};
use crate::Result;

/// Show the current date and time
#[derive(Parser)]
pub(crate) struct ClockCommand {
    /// Refresh every second until interrupted
    #[arg(long)]
    watch: bool,
}

#[async_trait]
impl Command for ClockCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        if !self.watch {
            return write_clock(&ctx).await;
        }

        let mut interval = tokio::time::interval(Duration::from_secs(1));
        loop {
            tokio::select! {
                _ = interval.tick() => write_clock(&ctx).await?,
                _ = tokio::signal::ctrl_c() => break,
            }
        }

        Ok(())
    }
}

async fn write_clock(ctx: &CommandContext) -> Result<()> {
    let mut writer = ctx.writer.write().await;
    writeln!(
        writer,
        "{}",
        format_clock(clock_now(&ctx.config), ctx.config.clock.locale)
    )?;
    writer.flush()?;

    Ok(())
}
