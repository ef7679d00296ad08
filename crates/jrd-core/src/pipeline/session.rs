//! Per-session fan-out across object ids.

use std::collections::HashSet;
use std::path::PathBuf;
use tokio::task::JoinSet;

use super::Pipeline;
use crate::artifact::ArtifactDescriptor;
use crate::session::SessionRef;
use crate::{locator, resolver, retrieve};

impl Pipeline {
    /// Resolves the session's object ids and retrieves each one concurrently.
    /// Returns the paths that were written; failed units are left out.
    pub async fn download_session(&self, session: SessionRef) -> Vec<PathBuf> {
        let ids = {
            let pipeline = self.clone();
            let session = session.clone();
            tokio::task::spawn_blocking(move || {
                resolver::resolve(pipeline.transport.as_ref(), &pipeline.endpoints, &session)
            })
            .await
        };
        let ids = match ids {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!("metadata task for {} failed: {}", session, e);
                return Vec::new();
            }
        };

        // Distinct ids map to distinct destinations; repeats would race on one file.
        let mut seen = HashSet::new();
        let mut units = JoinSet::new();
        for id in ids.into_iter().filter(|id| seen.insert(id.clone())) {
            let pipeline = self.clone();
            let session = session.clone();
            units.spawn_blocking(move || pipeline.download_object(&session, &id));
        }
        let queued = units.len();

        let mut paths = Vec::new();
        while let Some(res) = units.join_next().await {
            match res {
                Ok(Some(path)) => paths.push(path),
                Ok(None) => {}
                Err(e) => tracing::warn!("download task for {} failed: {}", session, e),
            }
        }
        tracing::info!(
            "session {}: {} of {} artifacts downloaded",
            session,
            paths.len(),
            queued
        );
        paths
    }

    /// One leaf unit: probe, then stream the binary. Blocking.
    pub(super) fn download_object(
        &self,
        session: &SessionRef,
        game_object_id: &str,
    ) -> Option<PathBuf> {
        let transport = self.transport.as_ref();
        let binary_url = locator::locate(transport, &self.endpoints, session, game_object_id)?;
        let artifact =
            ArtifactDescriptor::new(session, game_object_id, binary_url, &self.output_dir);
        retrieve::retrieve(transport, &artifact)
    }
}
