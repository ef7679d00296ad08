//! Fan-out orchestrator.
//!
//! Drives parse → resolve → locate → retrieve for one session URL or a batch
//! of them. Sessions run as one task group and each session's object ids as a
//! nested group; every unit is independent and a failed unit only shrinks the
//! result. Both groups are awaited to completion before returning.

mod session;


use anyhow::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::task::JoinSet;

use crate::config::JrdConfig;
use crate::endpoints::Endpoints;
use crate::session::{parse_artifact_url, parse_local_storage, InputError, SessionRef};
use crate::transport::{CurlTransport, HttpOptions, Transport};

/// Shared, read-only pipeline state. Cheap to clone into tasks.
#[derive(Clone)]
pub struct Pipeline {
    transport: Arc<dyn Transport>,
    endpoints: Arc<Endpoints>,
    output_dir: Arc<PathBuf>,
}

impl Pipeline {
    pub fn new(
        transport: Arc<dyn Transport>,
        endpoints: Endpoints,
        output_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            transport,
            endpoints: Arc::new(endpoints),
            output_dir: Arc::new(output_dir.into()),
        }
    }

    /// Pipeline over a curl transport with the configured timeouts, retry policy and endpoints.
    /// `output_dir` overrides the configured directory when given.
    pub fn from_config(cfg: &JrdConfig, output_dir: Option<PathBuf>) -> Result<Self> {
        let transport = CurlTransport::new(HttpOptions::from_config(cfg));
        Ok(Self::new(
            Arc::new(transport),
            cfg.endpoints()?,
            output_dir.unwrap_or_else(|| cfg.output_dir.clone()),
        ))
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Downloads every artifact of the session named by `url`.
    /// An unparsable URL is an input error and nothing is fetched.
    pub async fn download_url(&self, url: &str) -> Result<Vec<PathBuf>, InputError> {
        let session = parse_artifact_url(url)?;
        Ok(self.download_session(session).await)
    }

    /// Downloads every session referenced by a local-storage export.
    /// Invalid JSON is an input error; records with unusable URLs are skipped.
    pub async fn download_local_storage(&self, text: &str) -> Result<Vec<PathBuf>, InputError> {
        let urls = parse_local_storage(text)?;
        Ok(self.download_urls(urls).await)
    }

    /// Downloads the sessions named by `urls` concurrently. URLs that do not
    /// parse are logged and skipped; repeated sessions are fetched once.
    pub async fn download_urls(&self, urls: Vec<String>) -> Vec<PathBuf> {
        let mut seen: HashSet<SessionRef> = HashSet::new();
        let mut sessions = JoinSet::new();
        for url in urls {
            let session = match parse_artifact_url(&url) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!("skipping record: {}", e);
                    continue;
                }
            };
            if !seen.insert(session.clone()) {
                tracing::debug!("session {} already queued", session);
                continue;
            }
            let pipeline = self.clone();
            sessions.spawn(async move { pipeline.download_session(session).await });
        }

        let mut paths = Vec::new();
        while let Some(res) = sessions.join_next().await {
            match res {
                Ok(mut p) => paths.append(&mut p),
                Err(e) => tracing::warn!("session task failed: {}", e),
            }
        }
        paths
    }
}
