// Command handlers

use clap::CommandFactory;
use reuni_client::ConfigurationClient;
use reuni_config::ClientConfig;
use reuni_core::error::Result;
use tracing::debug;

use crate::cli::{Args, Command};

pub mod configuration;

/// Main command dispatcher
#[must_use = "command execution results should be handled"]
pub async fn execute_command(args: Args) -> Result<()> {
    match &args.command {
        Command::Configuration { flags, command } => {
            let scope = flags.scope()?;
            let Some(command) = command else {
                debug!("No configuration subcommand given, printing help");
                return print_configuration_help();
            };

            let settings = ClientConfig::load(args.config.as_deref())?;
            let token = settings.resolve_token()?;
            debug!(server = settings.base_url(), scope = %scope.path(), "Handling configuration command");

            let client = ConfigurationClient::new(settings.base_url(), token);
            configuration::handle_configuration_command(&client, &scope, flags, command).await
        }
    }
}

fn print_configuration_help() -> Result<()> {
    let mut cli = Args::command();
    if let Some(group) = cli.find_subcommand_mut("configuration") {
        group.print_long_help()?;
    }
    Ok(())
}
