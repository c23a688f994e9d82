//! Tests for the generate subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_generate() {
    match parse(&["hardoc", "generate", "capture.har", "--routes", "routes.toml"]) {
        CliCommand::Generate {
            har,
            routes,
            output,
            include_module,
            skip_unresolved,
        } => {
            assert_eq!(har, Path::new("capture.har"));
            assert_eq!(routes, Path::new("routes.toml"));
            assert!(output.is_none());
            assert!(!include_module);
            assert!(!skip_unresolved);
        }
        _ => panic!("expected Generate"),
    }
}

#[test]
fn cli_parse_generate_output() {
    match parse(&[
        "hardoc",
        "generate",
        "capture.har",
        "--routes",
        "routes.toml",
        "--output",
        "endpoints.md",
    ]) {
        CliCommand::Generate { output, .. } => {
            assert_eq!(output.as_deref(), Some(Path::new("endpoints.md")));
        }
        _ => panic!("expected Generate with --output"),
    }
}

#[test]
fn cli_parse_generate_flags() {
    match parse(&[
        "hardoc",
        "generate",
        "capture.har",
        "--routes",
        "routes.toml",
        "--include-module",
        "--skip-unresolved",
    ]) {
        CliCommand::Generate {
            include_module,
            skip_unresolved,
            ..
        } => {
            assert!(include_module);
            assert!(skip_unresolved);
        }
        _ => panic!("expected Generate with flags"),
    }
}

#[test]
fn cli_parse_generate_requires_routes() {
    assert!(Cli::try_parse_from(["hardoc", "generate", "capture.har"]).is_err());
}
