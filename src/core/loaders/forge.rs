use async_trait::async_trait;
use tracing::{debug, info};

use super::context::InstallContext;
use super::installer::{LaunchArtifact, LoaderInstaller};
use crate::core::downloader::download_file;
use crate::core::error::{ProvisionError, ProvisionResult};
use crate::core::files::{matching_files, remove_if_exists};
use crate::core::java::ProcessCommand;
use crate::core::maven::FORGE_MAVEN;

const FORGE_INSTALLER_FILE: &str = "forge-installer.jar";

/// Installs Forge by downloading and executing the official installer JAR
/// from inside `server/`, then locating the jar it produced.
pub struct ForgeInstaller;

impl ForgeInstaller {
    pub fn installer_url(minecraft_version: &str, loader_version: &str) -> String {
        let forge_id = format!("{}-{}", minecraft_version, loader_version);
        format!(
            "{}/net/minecraftforge/forge/{id}/forge-{id}-installer.jar",
            FORGE_MAVEN,
            id = forge_id
        )
    }
}

#[async_trait]
impl LoaderInstaller for ForgeInstaller {
    async fn install(&self, ctx: &InstallContext<'_>) -> ProvisionResult<LaunchArtifact> {
        let loader_version = ctx.require_loader_version("Forge")?;
        info!(
            "Installing Forge {} for MC {}",
            loader_version, ctx.minecraft_version
        );

        let installer_path = ctx.installer_path(FORGE_INSTALLER_FILE);
        let installer_url = Self::installer_url(ctx.minecraft_version, loader_version);
        download_file(ctx.fetcher, &installer_url, &installer_path).await?;

        let server_dir = ctx.server_dir();
        let command = ProcessCommand::java_jar(
            ctx.java_bin,
            &installer_path,
            vec!["--installServer".to_string()],
            &server_dir,
        );
        ctx.runner.run(&command)?;

        // The installer logs next to where it ran.
        let install_log = server_dir.join(format!("{}.log", FORGE_INSTALLER_FILE));
        if remove_if_exists(&install_log)? {
            debug!("Removed {:?}", install_log);
        }

        let forge_jars = matching_files(&server_dir, "forge-", ".jar")?;
        let forge_jar = match forge_jars.as_slice() {
            [single] => single,
            [] => {
                return Err(ProvisionError::Install(format!(
                    "no forge-*.jar found in {:?} after install",
                    server_dir
                )))
            }
            many => {
                return Err(ProvisionError::Install(format!(
                    "ambiguous Forge server jar, {} candidates: {:?}",
                    many.len(),
                    many
                )))
            }
        };

        let jar_name = forge_jar
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .ok_or_else(|| ProvisionError::Install(format!("invalid jar path {:?}", forge_jar)))?;

        info!("Forge {} installed successfully: {}", loader_version, jar_name);
        Ok(LaunchArtifact::JarFile(jar_name))
    }
}
