//! CLI for the JRD replay downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use jrd_core::config;
use jrd_core::pipeline::Pipeline;
use jrd_core::storage;
use std::path::PathBuf;

use commands::{run_local_storage, run_prompt, run_url};

/// Top-level CLI for the JRD replay downloader.
#[derive(Debug, Parser)]
#[command(name = "jrd")]
#[command(about = "JRD: download the animations of a Jackbox game session", long_about = None)]
pub struct Cli {
    /// Directory to write animations to (overrides `output_dir` from config).
    #[arg(long, short, global = true, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Without a subcommand, the input is asked for interactively.
    #[command(subcommand)]
    pub command: Option<CliCommand>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Download every animation of the session behind an artifact URL.
    Url {
        /// Artifact URL, e.g. https://games.jackbox.tv/artifact/quiplash3Game/<session>.
        url: String,
    },

    /// Download every session referenced by a browser local-storage export.
    LocalStorage {
        /// Path to the JSON export, or `-` for stdin.
        path: String,
    },
}

impl Cli {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        let pipeline = Pipeline::from_config(&cfg, cli.output)?;
        storage::ensure_output_dir(pipeline.output_dir())?;

        match cli.command {
            Some(CliCommand::Url { url }) => run_url(&pipeline, &url).await?,
            Some(CliCommand::LocalStorage { path }) => run_local_storage(&pipeline, &path).await?,
            None => run_prompt(&pipeline).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
