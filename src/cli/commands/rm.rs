//! Implementation of the `cfs rm` command.

use anyhow::{bail, Context, Result};
use clap::Args;
use serde::Serialize;
use tracing::info;

use crate::cli::output::{no_such_credential_or_path, output, CommandOutput};
use crate::domain::ports::CredentialStore;
use crate::services::{normalize_query_path, subtree_names};

#[derive(Args, Debug)]
pub struct RmArgs {
    /// Credential name, or a path when used with -r
    pub path: String,

    /// Recursively delete credentials
    #[arg(short, long)]
    pub recursive: bool,
}

#[derive(Debug, Serialize)]
pub struct RmOutput {
    pub deleted: Vec<String>,
}

impl CommandOutput for RmOutput {
    fn to_human(&self) -> String {
        String::new()
    }

    fn quiet_when_empty(&self) -> bool {
        true
    }
}

/// Delete an exact match, or with `recursive` everything under the path.
///
/// Recursive deletion goes one credential at a time in store order and stops at
/// the first failure; anything not reached yet is left in place.
pub async fn handle(store: &dyn CredentialStore, args: &RmArgs) -> Result<RmOutput> {
    if args.path.is_empty() {
        bail!(no_such_credential_or_path(&args.path));
    }
    let path = normalize_query_path(&args.path);

    match store.get_by_name(&path).await {
        Ok(_) => {
            store
                .delete_by_name(&path)
                .await
                .with_context(|| format!("failed to remove {path}"))?;
            info!(name = %path, "removed credential");
            return Ok(RmOutput {
                deleted: vec![path],
            });
        }
        Err(err) if err.is_not_found() => {}
        Err(err) => return Err(err).context("failed to get credential"),
    }

    let credentials = store
        .find_by_path(&path)
        .await
        .context("failed to find credentials")?;
    let names = subtree_names(&credentials, &path);

    if names.is_empty() {
        bail!(no_such_credential_or_path(&path));
    }
    if !args.recursive {
        bail!("not removing recursively without '-r' flag");
    }

    let mut deleted = Vec::with_capacity(names.len());
    for name in names {
        store
            .delete_by_name(name)
            .await
            .with_context(|| format!("failed to remove {name}"))?;
        info!(name = %name, "removed credential");
        deleted.push(name.to_string());
    }

    Ok(RmOutput { deleted })
}

pub async fn execute(store: &dyn CredentialStore, args: RmArgs, json_mode: bool) -> Result<()> {
    let result = handle(store, &args).await?;
    output(&result, json_mode);
    Ok(())
}
