use std::{io::Write, sync::Arc};

use clap::Parser;
use ctrlhora_api_interface::MockApiService;
use ctrlhora_config::Config;
use ctrlhora_core::{
    geolocation::{FixedGeolocationService, GeolocationService, UnavailableGeolocationService},
    CoreModule,
};
use ctrlhora_models::{GpsPosition, Session};
use ctrlhora_session_memory::MemorySessionStore;
use tokio::sync::RwLock;

use crate::{
    args::{Args, CommandExecutor},
    commands::CommandContext,
};

pub(crate) struct CommandContextTest {
    pub config: Config,
    pub core_module: CoreModule,
    pub api_service: MockApiService,
    pub session_store: MemorySessionStore,
    pub geolocation_service: Box<dyn GeolocationService>,
}

impl CommandContextTest {
    pub fn new() -> Self {
        Self {
            config: Config::from_env_no_version(),
            core_module: CoreModule::builder().build(),
            api_service: MockApiService::new(),
            session_store: MemorySessionStore::new(),
            geolocation_service: Box::new(UnavailableGeolocationService),
        }
    }

    /// Start with a stored session, whose token is `<username>-token`.
    pub fn with_session(username: &str, is_admin: bool) -> Self {
        Self {
            session_store: MemorySessionStore::with_session(Session {
                access_token: format!("{username}-token"),
                token_type: "bearer".into(),
                username: username.into(),
                is_admin,
            }),
            ..Self::new()
        }
    }

    pub fn set_position(&mut self, latitude: f64, longitude: f64) {
        let position = GpsPosition::new(latitude, longitude).unwrap();
        self.geolocation_service = Box::new(FixedGeolocationService::new(position));
    }

    pub fn into_context(self, writer: Arc<RwLock<dyn Write + Send + Sync>>) -> CommandContext {
        CommandContext {
            config: self.config,
            core_module: self.core_module,
            api_service: Box::new(self.api_service),
            session_store: Box::new(self.session_store),
            geolocation_service: self.geolocation_service,
            writer,
        }
    }
}

fn parse_args(command_args: &[&str]) -> Args {
    let command_args = {
        let mut tmp_args = vec!["ctrlhora"];
        tmp_args.extend(command_args);
        tmp_args
    };

    match Args::try_parse_from(command_args) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            panic!("Parse error.")
        }
    }
}

pub(crate) async fn test_command(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    CommandExecutor::parse_args_async(parse_args(command_args), ctx.into_context(buf.clone()))
        .await
        .unwrap();

    let vec = buf.read().await.to_vec();
    std::str::from_utf8(&vec).unwrap().to_string()
}

/// Run a command expected to fail, returning the error as `main` prints it.
pub(crate) async fn test_command_error(ctx: CommandContextTest, command_args: &[&str]) -> String {
    let buf = Arc::new(RwLock::new(Vec::new()));

    CommandExecutor::parse_args_async(parse_args(command_args), ctx.into_context(buf.clone()))
        .await
        .unwrap_err()
        .to_string()
}
