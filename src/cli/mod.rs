//! Command-line interface: argument types, output rendering and the `cat`,
//! `ls`, `rm` and `set` commands.

pub mod commands;
pub mod output;
pub mod types;

pub use types::{Cli, Commands};

use anyhow::Result;

use crate::domain::ports::CredentialStore;

/// Run one parsed command against a credential store.
pub async fn dispatch(command: Commands, store: &dyn CredentialStore, json_mode: bool) -> Result<()> {
    match command {
        Commands::Cat(args) => commands::cat::execute(store, args, json_mode).await,
        Commands::Ls(args) => commands::ls::execute(store, args, json_mode).await,
        Commands::Rm(args) => commands::rm::execute(store, args, json_mode).await,
        Commands::Set(args) => commands::set::execute(store, args, json_mode).await,
    }
}

/// Print an error to stderr and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        eprintln!("{}", serde_json::json!({ "error": format!("{err:#}") }));
    } else {
        eprintln!("{err:#}");
    }
    std::process::exit(1)
}
