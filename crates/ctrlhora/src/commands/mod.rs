//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use ctrlhora_api_interface::ApiService;
use ctrlhora_config::Config;
use ctrlhora_core::{geolocation::GeolocationService, CoreContext, CoreModule};
use ctrlhora_session_interface::SessionStore;
use tokio::sync::RwLock;

use self::{
    clock::ClockCommand,
    clocking::{EntryCommand, ExitCommand},
    login::LoginCommand,
    logout::LogoutCommand,
    status::StatusCommand,
    ui::UiCommand,
    users::UsersCommand,
};
use crate::Result;

mod clock;
mod clocking;
mod login;
mod logout;
mod status;
mod ui;
mod users;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService>,
    pub session_store: Box<dyn SessionStore>,
    pub geolocation_service: Box<dyn GeolocationService>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
            session_store: self.session_store.as_ref(),
            geolocation_service: self.geolocation_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Login(LoginCommand),
    Logout(LogoutCommand),
    Status(StatusCommand),
    Entry(EntryCommand),
    Exit(ExitCommand),
    Users(UsersCommand),
    Clock(ClockCommand),
    Ui(UiCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Login(sub) => sub.execute(ctx).await,
            Self::Logout(sub) => sub.execute(ctx).await,
            Self::Status(sub) => sub.execute(ctx).await,
            Self::Entry(sub) => sub.execute(ctx).await,
            Self::Exit(sub) => sub.execute(ctx).await,
            Self::Users(sub) => sub.execute(ctx).await,
            Self::Clock(sub) => sub.execute(ctx).await,
            Self::Ui(sub) => sub.execute(ctx).await,
        }
    }
}
