//! Implementation of the `cfs set` command.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Credential;
use crate::domain::ports::CredentialStore;

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Full name of the credential
    pub path: String,

    /// New value
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct SetOutput {
    pub credential: Credential,
}

impl CommandOutput for SetOutput {
    fn to_human(&self) -> String {
        format!("{} updated", self.credential.name)
    }
}

pub async fn handle(store: &dyn CredentialStore, args: &SetArgs) -> Result<SetOutput> {
    let credential = store
        .set_by_name(&args.path, &args.value)
        .await
        .context("failed to set credential")?;
    Ok(SetOutput { credential })
}

pub async fn execute(store: &dyn CredentialStore, args: SetArgs, json_mode: bool) -> Result<()> {
    let result = handle(store, &args).await?;
    output(&result, json_mode);
    Ok(())
}
