//! Sequential append writer for a streamed response body.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Appends body chunks to a destination file in arrival order.
///
/// Opening truncates any previous content, so a re-run or a retried attempt
/// overwrites the file instead of growing it.
pub struct AppendSink {
    file: File,
    path: PathBuf,
    written: u64,
}

impl AppendSink {
    /// Create (or truncate) `path` and open it for appending.
    pub fn create(path: &Path) -> io::Result<Self> {
        OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
            written: 0,
        })
    }

    pub fn append(&mut self, data: &[u8]) -> io::Result<()> {
        self.file.write_all(data)?;
        self.written += data.len() as u64;
        Ok(())
    }

    /// Bytes appended so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flush and sync to disk. Returns the total bytes written.
    pub fn finish(mut self) -> io::Result<u64> {
        self.file.flush()?;
        self.file.sync_all()?;
        Ok(self.written)
    }
}
