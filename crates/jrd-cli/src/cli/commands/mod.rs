//! CLI command handlers.

mod local_storage;
mod prompt;
mod url;

pub use local_storage::run_local_storage;
pub use prompt::run_prompt;
pub use url::run_url;

use std::path::PathBuf;

/// Prints the outcome of a run: the absolute paths written, or that nothing was.
pub(crate) fn report(paths: &[PathBuf]) {
    println!();
    if paths.is_empty() {
        println!("No files downloaded");
        return;
    }
    println!("{} files downloaded:", paths.len());
    for path in paths {
        let shown = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
        println!("{}", shown.display());
    }
}
