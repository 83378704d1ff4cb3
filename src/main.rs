//! cfs CLI entry point.

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use tracing::debug;

use credhub_fs::cli::{self, Cli, Commands};
use credhub_fs::{ConfigLoader, CredHubClient, CredHubClientConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        if let Err(err) = Cli::command().print_help() {
            cli::handle_error(err.into(), cli.json);
        }
        return;
    };

    if let Err(err) = run(command, cli.config.as_deref(), cli.json).await {
        cli::handle_error(err, cli.json);
    }
}

async fn run(command: Commands, config_file: Option<&std::path::Path>, json_mode: bool) -> Result<()> {
    let config = ConfigLoader::load(config_file)?;
    LoggerImpl::init(&config.logging)?;
    debug!(credhub = ?config.credhub, "configuration loaded");

    let client = CredHubClient::new(CredHubClientConfig::from(&config.credhub))?;

    tokio::select! {
        result = cli::dispatch(command, &client, json_mode) => result,
        _ = tokio::signal::ctrl_c() => Err(anyhow!("interrupted")),
    }
}
