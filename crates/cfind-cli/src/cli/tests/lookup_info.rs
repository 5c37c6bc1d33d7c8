//! Tests for the lookup and info subcommands.

use super::parse;
use crate::cli::{BackendArg, CliCommand};

#[test]
fn cli_parse_lookup() {
    match parse(&["cfind", "lookup", "basesystem"]) {
        CliCommand::Lookup { package, backend } => {
            assert_eq!(package, "basesystem");
            assert!(backend.is_none());
        }
        _ => panic!("expected Lookup"),
    }
}

#[test]
fn cli_parse_lookup_backend_http() {
    match parse(&["cfind", "lookup", "basesystem", "--backend", "http"]) {
        CliCommand::Lookup { package, backend } => {
            assert_eq!(package, "basesystem");
            assert_eq!(backend, Some(BackendArg::Http));
        }
        _ => panic!("expected Lookup with --backend http"),
    }
}

#[test]
fn cli_parse_lookup_backend_mgarepo() {
    match parse(&["cfind", "lookup", "basesystem", "--backend", "mgarepo"]) {
        CliCommand::Lookup { backend, .. } => {
            assert_eq!(backend, Some(BackendArg::Mgarepo));
        }
        _ => panic!("expected Lookup with --backend mgarepo"),
    }
}

#[test]
fn cli_parse_info() {
    match parse(&["cfind", "info", "kernel"]) {
        CliCommand::Info { package, backend } => {
            assert_eq!(package, "kernel");
            assert!(backend.is_none());
        }
        _ => panic!("expected Info"),
    }
}

#[test]
fn cli_parse_lookup_keeps_odd_names_verbatim() {
    match parse(&["cfind", "lookup", "libreoffice-l10n-fr"]) {
        CliCommand::Lookup { package, .. } => assert_eq!(package, "libreoffice-l10n-fr"),
        _ => panic!("expected Lookup"),
    }
}
