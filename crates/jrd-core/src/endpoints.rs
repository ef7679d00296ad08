//! Remote endpoint templates.
//!
//! The defaults reproduce the public service layout exactly; the bases can be
//! overridden from config (used to point the pipeline at a local server).

use anyhow::Result;

pub const DEFAULT_FISHERY_BASE: &str = "https://fishery.jackboxgames.com";
pub const DEFAULT_BLOB_BASE: &str = "https://s3.amazonaws.com/jbg-blobcast-artifacts";

/// Which request path serves a title's session metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataRoute {
    /// `{fishery}/artifact/gallery/{title}/{session}`
    Gallery,
    /// `{fishery}/artifact/{title}/{session}`
    Direct,
}

/// Base URLs for the metadata/probe service and the animation bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    fishery_base: String,
    blob_base: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            fishery_base: DEFAULT_FISHERY_BASE.to_string(),
            blob_base: DEFAULT_BLOB_BASE.to_string(),
        }
    }
}

impl Endpoints {
    /// Builds endpoints from two absolute http(s) base URLs. Trailing slashes are dropped.
    pub fn new(fishery_base: &str, blob_base: &str) -> Result<Self> {
        Ok(Self {
            fishery_base: validate_base(fishery_base)?,
            blob_base: validate_base(blob_base)?,
        })
    }

    pub fn metadata_url(&self, route: MetadataRoute, title: &str, session_id: &str) -> String {
        match route {
            MetadataRoute::Gallery => format!(
                "{}/artifact/gallery/{}/{}",
                self.fishery_base, title, session_id
            ),
            MetadataRoute::Direct => {
                format!("{}/artifact/{}/{}", self.fishery_base, title, session_id)
            }
        }
    }

    pub fn probe_url(&self, title: &str, session_id: &str, object_id: &str) -> String {
        format!(
            "{}/artifact/gif/{}/{}/{}",
            self.fishery_base, title, session_id, object_id
        )
    }

    pub fn binary_url(&self, title: &str, session_id: &str, object_id: &str) -> String {
        format!(
            "{}/{}/{}/anim_{}.gif",
            self.blob_base, title, session_id, object_id
        )
    }
}

fn validate_base(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let parsed = url::Url::parse(trimmed)
        .map_err(|e| anyhow::anyhow!("invalid base URL {:?}: {}", raw, e))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        anyhow::bail!("base URL {:?} must be http or https", raw);
    }
    if parsed.host_str().is_none() {
        anyhow::bail!("base URL {:?} has no host", raw);
    }
    Ok(trimmed.to_string())
}
