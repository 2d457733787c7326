use async_trait::async_trait;
use tracing::info;

use crate::core::downloader::download_file;
use crate::core::error::{ProvisionError, ProvisionResult};
use crate::core::version::{VersionJson, VersionManifest};

use super::context::InstallContext;
use super::installer::{LaunchArtifact, LoaderInstaller};

pub const VANILLA_SERVER_JAR: &str = "server.jar";

/// Vanilla "installer": resolves the official Mojang version JSON and
/// drops the dedicated server jar into `server/`.
pub struct VanillaInstaller;

#[async_trait]
impl LoaderInstaller for VanillaInstaller {
    async fn install(&self, ctx: &InstallContext<'_>) -> ProvisionResult<LaunchArtifact> {
        info!("Installing Vanilla {}", ctx.minecraft_version);

        // 1. Fetch version manifest
        let manifest = VersionManifest::fetch(ctx.fetcher).await?;

        // 2. Find matching version entry
        let entry = manifest
            .find_version(ctx.minecraft_version)
            .ok_or_else(|| ProvisionError::VersionNotFound(ctx.minecraft_version.to_string()))?;

        // 3. Fetch version JSON and read the server download
        let version_json = VersionJson::fetch(ctx.fetcher, &entry.url).await?;
        let server = version_json.server_download()?;

        // 4. Download server.jar
        let dest = ctx.server_dir().join(VANILLA_SERVER_JAR);
        let written = download_file(ctx.fetcher, &server.url, &dest).await?;

        info!(
            "Vanilla {} installed successfully ({} bytes)",
            ctx.minecraft_version, written
        );
        Ok(LaunchArtifact::JarFile(VANILLA_SERVER_JAR.to_string()))
    }
}
