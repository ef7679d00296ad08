//! `jrd url <URL>` – download one session.

use anyhow::Result;
use jrd_core::pipeline::Pipeline;

use super::report;

pub async fn run_url(pipeline: &Pipeline, url: &str) -> Result<()> {
    let url = url.trim();
    println!("Downloading...");
    match pipeline.download_url(url).await {
        Ok(paths) => report(&paths),
        Err(e) => {
            tracing::warn!("{}", e);
            println!("Invalid URL: {}", url);
        }
    }
    Ok(())
}
