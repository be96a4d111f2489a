use std::sync::Arc;

use clap::Parser;
use ctrlhora_api_http::HttpApiService;
use ctrlhora_api_interface::ApiService;
use ctrlhora_config::{Config, SessionDriver};
use ctrlhora_core::{geolocation::geolocation_service_from_config, CoreModule};
use ctrlhora_session_file::FileSessionStore;
use ctrlhora_session_interface::SessionStore;
use ctrlhora_session_memory::MemorySessionStore;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

/// Time-tracking client for the "Control de hora" service
#[derive(Parser)]
#[command(name = "ctrlhora", version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();

            let api_service: Box<dyn ApiService> = {
                info!(root_url = %config.api.root_url, "Using HttpApiService API driver");
                Box::new(HttpApiService::new(config.clone())?)
            };

            let session_store: Box<dyn SessionStore> = {
                if config.session.driver == SessionDriver::File {
                    let store = FileSessionStore::from_config(&config);
                    info!(path = %store.path().display(), "Using FileSessionStore session driver");
                    Box::new(store)
                } else {
                    info!("Using MemorySessionStore session driver");
                    Box::new(MemorySessionStore::new())
                }
            };

            let geolocation_service = geolocation_service_from_config(&config)?;

            let ctx = CommandContext {
                config,
                api_service,
                session_store,
                geolocation_service,
                core_module,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))?;

        Ok(())
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}
