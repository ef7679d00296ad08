//! Output directory and destination file handling.

mod sink;

pub use sink::AppendSink;

use anyhow::{Context, Result};
use std::path::Path;

/// Create the output directory (and parents) if absent.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))
}

/// Best-effort removal of a partially written destination after a failed download.
pub fn discard_partial(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => tracing::debug!("removed partial file {}", path.display()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => tracing::warn!("could not remove partial file {}: {}", path.display(), e),
    }
}
