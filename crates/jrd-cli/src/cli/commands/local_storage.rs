//! `jrd local-storage <PATH>` – download every session in a local-storage export.

use anyhow::{Context, Result};
use jrd_core::pipeline::Pipeline;
use std::io::Read;

use super::report;

pub async fn run_local_storage(pipeline: &Pipeline, path: &str) -> Result<()> {
    let text = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("read local storage JSON from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path).with_context(|| format!("read {}", path))?
    };
    download_text(pipeline, &text).await
}

/// Runs the batch for already-read JSON text. Shared with the interactive prompt.
pub(crate) async fn download_text(pipeline: &Pipeline, text: &str) -> Result<()> {
    match pipeline.download_local_storage(text).await {
        Ok(paths) => report(&paths),
        Err(e) => {
            tracing::warn!("{}", e);
            println!("Invalid local storage JSON");
        }
    }
    Ok(())
}
