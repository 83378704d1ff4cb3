//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands::{cat::CatArgs, ls::LsArgs, rm::RmArgs, set::SetArgs};

#[derive(Parser, Debug)]
#[command(name = "cfs")]
#[command(about = "cfs interacts with CredHub using Unix filesystem commands", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Additional YAML configuration file
    #[arg(long, global = true, env = "CFS_CONFIG")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get the value of a credential
    Cat(CatArgs),

    /// List credentials
    Ls(LsArgs),

    /// Remove a credential, or every credential under a path with -r
    Rm(RmArgs),

    /// Set the value of a credential
    Set(SetArgs),
}
