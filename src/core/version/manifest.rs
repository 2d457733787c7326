// ─── Version Manifest ───
// Handles fetching the Mojang version manifest and the per-version metadata
// that carries the dedicated server download.

use serde::Deserialize;
use tracing::info;

use crate::core::downloader::{fetch_json, Fetch};
use crate::core::error::{ProvisionError, ProvisionResult};

pub const VERSION_MANIFEST_URL: &str =
    "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";

/// Top-level Mojang version manifest.
#[derive(Debug, Deserialize)]
pub struct VersionManifest {
    pub versions: Vec<VersionEntry>,
}

/// A single entry in the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct VersionEntry {
    pub id: String,
    pub url: String,
}

/// Per-version metadata, reduced to its downloads.
#[derive(Debug, Deserialize)]
pub struct VersionJson {
    pub id: String,
    pub downloads: VersionDownloads,
}

#[derive(Debug, Deserialize)]
pub struct VersionDownloads {
    /// Absent for versions that never shipped a dedicated server.
    pub server: Option<DownloadArtifact>,
}

#[derive(Debug, Deserialize)]
pub struct DownloadArtifact {
    pub url: String,
}

impl VersionManifest {
    pub async fn fetch(fetcher: &dyn Fetch) -> ProvisionResult<Self> {
        info!("Fetching Minecraft version manifest...");
        let manifest: VersionManifest = fetch_json(fetcher, VERSION_MANIFEST_URL).await?;
        info!("Loaded {} versions from manifest", manifest.versions.len());
        Ok(manifest)
    }

    /// Find a specific version entry by ID (e.g. "1.20.4").
    pub fn find_version(&self, id: &str) -> Option<&VersionEntry> {
        self.versions.iter().find(|v| v.id == id)
    }
}

impl VersionJson {
    pub async fn fetch(fetcher: &dyn Fetch, url: &str) -> ProvisionResult<Self> {
        fetch_json(fetcher, url).await
    }

    pub fn server_download(&self) -> ProvisionResult<&DownloadArtifact> {
        self.downloads
            .server
            .as_ref()
            .ok_or_else(|| ProvisionError::MissingKey(format!("downloads.server of {}", self.id)))
    }
}
