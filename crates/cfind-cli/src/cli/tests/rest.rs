//! Tests for the open, interactive, and completions subcommands.

use super::parse;
use crate::cli::{BackendArg, CliCommand};

#[test]
fn cli_parse_open() {
    match parse(&["cfind", "open", "basesystem"]) {
        CliCommand::Open { package, backend } => {
            assert_eq!(package, "basesystem");
            assert!(backend.is_none());
        }
        _ => panic!("expected Open"),
    }
}

#[test]
fn cli_parse_interactive() {
    match parse(&["cfind", "interactive"]) {
        CliCommand::Interactive { backend } => assert!(backend.is_none()),
        _ => panic!("expected Interactive"),
    }
}

#[test]
fn cli_parse_interactive_backend() {
    match parse(&["cfind", "interactive", "--backend", "mgarepo"]) {
        CliCommand::Interactive { backend } => {
            assert_eq!(backend, Some(BackendArg::Mgarepo));
        }
        _ => panic!("expected Interactive with --backend"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["cfind", "completions", "bash"]) {
        CliCommand::Completions { shell } => {
            assert_eq!(shell, clap_complete::Shell::Bash);
        }
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_rejects_unknown_subcommand() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["cfind", "frobnicate"]).is_err());
}

#[test]
fn cli_lookup_requires_package() {
    use clap::Parser;
    assert!(crate::cli::Cli::try_parse_from(["cfind", "lookup"]).is_err());
}
