use serde::Deserialize;
use tracing::info;

use crate::core::downloader::{fetch_json, Fetch};
use crate::core::error::{ProvisionError, ProvisionResult};

pub const MODRINTH_API_BASE: &str = "https://api.modrinth.com/v2";

/// Subset of a Modrinth project version.
#[derive(Debug, Clone, Deserialize)]
pub struct ModrinthVersion {
    pub id: String,
    pub files: Vec<ModrinthVersionFile>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModrinthVersionFile {
    pub url: String,
    pub filename: String,
    #[serde(default)]
    pub primary: bool,
}

impl ModrinthVersion {
    /// The file flagged primary, or the first file when none is.
    pub fn primary_file(&self) -> ProvisionResult<&ModrinthVersionFile> {
        self.files
            .iter()
            .find(|f| f.primary)
            .or_else(|| self.files.first())
            .ok_or_else(|| {
                ProvisionError::Resolution(format!("version {} has no downloadable files", self.id))
            })
    }
}

/// Resolve `source` to a pack version: a project id or slug (latest version
/// wins) or, when no such project exists, a version id.
pub async fn resolve_pack_version(
    fetcher: &dyn Fetch,
    source: &str,
) -> ProvisionResult<ModrinthVersion> {
    let project_url = format!("{}/project/{}/version", MODRINTH_API_BASE, source);

    match fetch_json::<Vec<ModrinthVersion>>(fetcher, &project_url).await {
        Ok(versions) => {
            let latest = versions.into_iter().next().ok_or_else(|| {
                ProvisionError::Resolution(format!("project {} has no versions", source))
            })?;
            info!("Resolved project {} to latest version {}", source, latest.id);
            Ok(latest)
        }
        Err(ProvisionError::DownloadFailed { status: 404, .. }) => {
            info!("{} is not a project, trying it as a version id", source);
            let version_url = format!("{}/version/{}", MODRINTH_API_BASE, source);
            fetch_json(fetcher, &version_url).await
        }
        Err(e) => Err(e),
    }
}
