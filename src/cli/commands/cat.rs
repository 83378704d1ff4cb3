//! Implementation of the `cfs cat` command.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::output::{no_such_credential_or_path, output, CommandOutput};
use crate::domain::models::Credential;
use crate::domain::ports::CredentialStore;
use crate::domain::StoreError;

#[derive(Args, Debug)]
pub struct CatArgs {
    /// Full name of the credential, e.g. /team/db/password
    pub path: String,
}

#[derive(Debug, Serialize)]
pub struct CatOutput {
    pub credential: Credential,
}

impl CommandOutput for CatOutput {
    fn to_human(&self) -> String {
        self.credential.value.clone()
    }
}

pub async fn handle(store: &dyn CredentialStore, args: &CatArgs) -> Result<CatOutput> {
    match store.get_by_name(&args.path).await {
        Ok(credential) => Ok(CatOutput { credential }),
        Err(StoreError::NotFound { .. }) => bail!(no_such_credential_or_path(&args.path)),
        Err(err) => Err(err).context("failed to get credential"),
    }
}

pub async fn execute(store: &dyn CredentialStore, args: CatArgs, json_mode: bool) -> Result<()> {
    let result = handle(store, &args).await?;
    output(&result, json_mode);
    Ok(())
}
