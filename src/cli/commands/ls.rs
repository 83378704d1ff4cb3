//! Implementation of the `cfs ls` command.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Local};
use clap::Args;
use serde::Serialize;
use tracing::debug;

use crate::cli::output::{no_such_credential_or_path, output, CommandOutput};
use crate::domain::ports::CredentialStore;
use crate::services::{is_root, normalize_query_path, project, render, ListingStyle, PathEntry, ROOT};

#[derive(Args, Debug)]
pub struct LsArgs {
    /// Path to list (defaults to the root)
    pub path: Option<String>,

    /// List in long format
    #[arg(short = 'l')]
    pub long: bool,

    /// List one per line
    #[arg(short = '1')]
    pub one_per_line: bool,
}

#[derive(Debug, Serialize)]
pub struct LsOutput {
    pub path: String,
    pub entries: Vec<PathEntry>,
    #[serde(skip)]
    pub style: ListingStyle,
    #[serde(skip)]
    pub now: DateTime<Local>,
}

impl CommandOutput for LsOutput {
    fn to_human(&self) -> String {
        render(&self.entries, self.style, self.now)
    }
}

pub async fn handle(store: &dyn CredentialStore, args: &LsArgs) -> Result<LsOutput> {
    let path = normalize_query_path(args.path.as_deref().unwrap_or(ROOT));

    let credentials = store
        .find_by_path(&path)
        .await
        .context("failed to list credentials")?;
    debug!(path = %path, matches = credentials.len(), "listing path");

    let entries = if credentials.is_empty() && !is_root(&path) {
        match store.get_by_name(&path).await {
            Ok(credential) => vec![PathEntry::leaf(&credential)],
            Err(err) if err.is_not_found() => bail!(no_such_credential_or_path(&path)),
            Err(err) => return Err(err).context("failed to get credential"),
        }
    } else {
        project(&credentials, &path)
    };

    Ok(LsOutput {
        path,
        entries,
        style: ListingStyle::from_flags(args.long, args.one_per_line),
        now: Local::now(),
    })
}

pub async fn execute(store: &dyn CredentialStore, args: LsArgs, json_mode: bool) -> Result<()> {
    let result = handle(store, &args).await?;
    output(&result, json_mode);
    Ok(())
}
