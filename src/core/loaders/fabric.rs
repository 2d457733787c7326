use async_trait::async_trait;
use tracing::info;

use super::context::InstallContext;
use super::installer::{LaunchArtifact, LoaderInstaller};
use crate::core::downloader::download_file;
use crate::core::error::ProvisionResult;
use crate::core::java::ProcessCommand;
use crate::core::maven::FABRIC_MAVEN;

/// Generic installer release used for every Fabric loader version.
pub const FABRIC_INSTALLER_VERSION: &str = "1.0.1";
pub const FABRIC_SERVER_JAR: &str = "fabric-server-launch.jar";
const FABRIC_INSTALLER_FILE: &str = "fabric-installer.jar";

/// Runs the Fabric installer in server mode against `server/`.
pub struct FabricInstaller;

impl FabricInstaller {
    pub fn installer_url() -> String {
        format!(
            "{}/net/fabricmc/fabric-installer/{v}/fabric-installer-{v}.jar",
            FABRIC_MAVEN,
            v = FABRIC_INSTALLER_VERSION
        )
    }

    fn installer_args(ctx: &InstallContext<'_>, loader_version: &str) -> Vec<String> {
        vec![
            "server".to_string(),
            "-dir".to_string(),
            ctx.server_dir().to_string_lossy().to_string(),
            "-loader".to_string(),
            loader_version.to_string(),
            "-mcversion".to_string(),
            ctx.minecraft_version.to_string(),
            "-downloadMinecraft".to_string(),
        ]
    }
}

#[async_trait]
impl LoaderInstaller for FabricInstaller {
    async fn install(&self, ctx: &InstallContext<'_>) -> ProvisionResult<LaunchArtifact> {
        let loader_version = ctx.require_loader_version("Fabric")?;
        info!(
            "Installing Fabric loader {} for MC {}",
            loader_version, ctx.minecraft_version
        );

        // 1️⃣ Installer jar
        let installer_path = ctx.installer_path(FABRIC_INSTALLER_FILE);
        download_file(ctx.fetcher, &Self::installer_url(), &installer_path).await?;

        // 2️⃣ Server install, which also pulls the vanilla server jar
        let command = ProcessCommand::java_jar(
            ctx.java_bin,
            &installer_path,
            Self::installer_args(ctx, loader_version),
            ctx.work_dir.root(),
        );
        ctx.runner.run(&command)?;

        info!("Fabric installed successfully");
        Ok(LaunchArtifact::JarFile(FABRIC_SERVER_JAR.to_string()))
    }
}
