use async_trait::async_trait;
use clap::Parser;
use ctrlhora_core::{
    geolocation::FixedGeolocationService,
    use_cases::clocking::register_clock_event::RegisterClockEvent,
};
use ctrlhora_models::{ClockEventKind, GpsPosition};

use super::{Command, CommandContext};
use crate::Result;

/// Register an entry at the current position
#[derive(Parser)]
pub(crate) struct EntryCommand {
    /// Position to send, as `latitude,longitude` (e.g. `-33.45,-70.66`)
    #[arg(long, allow_hyphen_values = true)]
    gps: Option<GpsPosition>,
}

/// Register an exit at the current position
#[derive(Parser)]
pub(crate) struct ExitCommand {
    /// Position to send, as `latitude,longitude` (e.g. `-33.45,-70.66`)
    #[arg(long, allow_hyphen_values = true)]
    gps: Option<GpsPosition>,
}

#[async_trait]
impl Command for EntryCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        register(ctx, ClockEventKind::Entry, self.gps).await
    }
}

#[async_trait]
impl Command for ExitCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        register(ctx, ClockEventKind::Exit, self.gps).await
    }
}

async fn register(
    mut ctx: CommandContext,
    kind: ClockEventKind,
    gps: Option<GpsPosition>,
) -> Result<()> {
    // An explicit position wins over the configured one.
    if let Some(position) = gps {
        ctx.geolocation_service = Box::new(FixedGeolocationService::new(position));
    }

    RegisterClockEvent.run(&ctx.as_core_context(), kind).await?;
    writeln!(ctx.writer.write().await, "{} registered.", kind.label())?;

    Ok(())
}
