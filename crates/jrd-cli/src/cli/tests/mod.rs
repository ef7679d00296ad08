//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use std::path::PathBuf;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn url_subcommand() {
    let cli = parse(&["jrd", "url", "https://games.jackbox.tv/artifact/quiplash3Game/abc"]);
    match cli.command {
        Some(CliCommand::Url { url }) => {
            assert_eq!(url, "https://games.jackbox.tv/artifact/quiplash3Game/abc")
        }
        other => panic!("expected Url, got {:?}", other),
    }
    assert!(cli.output.is_none());
}

#[test]
fn local_storage_subcommand_with_stdin() {
    let cli = parse(&["jrd", "local-storage", "-"]);
    assert!(matches!(
        cli.command,
        Some(CliCommand::LocalStorage { ref path }) if path == "-"
    ));
}

#[test]
fn no_subcommand_means_prompt() {
    let cli = parse(&["jrd"]);
    assert!(cli.command.is_none());
}

#[test]
fn output_flag_is_global() {
    let cli = parse(&["jrd", "url", "https://x.tv/artifact/G/s", "--output", "gifs"]);
    assert_eq!(cli.output, Some(PathBuf::from("gifs")));
    let cli = parse(&["jrd", "-o", "/tmp/out"]);
    assert_eq!(cli.output, Some(PathBuf::from("/tmp/out")));
}

#[test]
fn url_requires_argument() {
    assert!(Cli::try_parse_from(["jrd", "url"]).is_err());
}
