//! Retrieval executor: streams one artifact to its destination.

use std::path::PathBuf;

use crate::artifact::ArtifactDescriptor;
use crate::retry::classify;
use crate::transport::Transport;

/// Downloads `artifact` to its destination and returns the path, or `None`
/// after logging the failure. A failed download leaves no file behind.
pub fn retrieve(transport: &dyn Transport, artifact: &ArtifactDescriptor) -> Option<PathBuf> {
    match transport.get_to_file(&artifact.binary_url, &artifact.destination) {
        Ok(bytes) => {
            tracing::debug!(
                "downloaded {} ({} bytes) to {}",
                artifact.binary_url,
                bytes,
                artifact.destination.display()
            );
            Some(artifact.destination.clone())
        }
        Err(e) => {
            tracing::warn!(
                "An error occurred while retrieving data from {} ({}): {}",
                artifact.binary_url,
                classify(&e),
                e
            );
            None
        }
    }
}
