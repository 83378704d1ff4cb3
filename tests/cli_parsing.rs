use std::path::PathBuf;

use clap::Parser;
use credhub_fs::cli::{Cli, Commands};
use credhub_fs::services::ListingStyle;

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["cfs"]).unwrap();
    assert!(cli.command.is_none());
    assert!(!cli.json);
}

#[test]
fn test_parse_cat() {
    let cli = Cli::try_parse_from(["cfs", "cat", "/team/db/password"]).unwrap();
    match cli.command {
        Some(Commands::Cat(args)) => assert_eq!(args.path, "/team/db/password"),
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_cat_requires_path() {
    assert!(Cli::try_parse_from(["cfs", "cat"]).is_err());
}

#[test]
fn test_parse_ls_defaults() {
    let cli = Cli::try_parse_from(["cfs", "ls"]).unwrap();
    match cli.command {
        Some(Commands::Ls(args)) => {
            assert!(args.path.is_none());
            assert!(!args.long);
            assert!(!args.one_per_line);
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_ls_flags() {
    let cli = Cli::try_parse_from(["cfs", "ls", "-l", "-1", "/some-dir"]).unwrap();
    match cli.command {
        Some(Commands::Ls(args)) => {
            assert_eq!(args.path.as_deref(), Some("/some-dir"));
            assert_eq!(
                ListingStyle::from_flags(args.long, args.one_per_line),
                ListingStyle::Long
            );
        }
        other => panic!("Wrong command: {other:?}"),
    }

    let cli = Cli::try_parse_from(["cfs", "ls", "-1"]).unwrap();
    match cli.command {
        Some(Commands::Ls(args)) => assert!(args.one_per_line && !args.long),
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_rm_recursive() {
    for flag in ["-r", "--recursive"] {
        let cli = Cli::try_parse_from(["cfs", "rm", flag, "/3dir"]).unwrap();
        match cli.command {
            Some(Commands::Rm(args)) => {
                assert_eq!(args.path, "/3dir");
                assert!(args.recursive);
            }
            other => panic!("Wrong command: {other:?}"),
        }
    }
}

#[test]
fn test_parse_rm_without_flag() {
    let cli = Cli::try_parse_from(["cfs", "rm", "/1foo"]).unwrap();
    match cli.command {
        Some(Commands::Rm(args)) => assert!(!args.recursive),
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_set() {
    let cli = Cli::try_parse_from(["cfs", "set", "/1foo", "new value"]).unwrap();
    match cli.command {
        Some(Commands::Set(args)) => {
            assert_eq!(args.path, "/1foo");
            assert_eq!(args.value, "new value");
        }
        other => panic!("Wrong command: {other:?}"),
    }
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli =
        Cli::try_parse_from(["cfs", "ls", "/", "--json", "--config", "/tmp/cfs.yaml"]).unwrap();
    assert!(cli.json);
    assert_eq!(cli.config, Some(PathBuf::from("/tmp/cfs.yaml")));
}

#[test]
fn test_parse_unknown_command_fails() {
    assert!(Cli::try_parse_from(["cfs", "mv", "/a", "/b"]).is_err());
}
