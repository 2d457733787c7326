use tracing::info;

use super::context::InstallContext;
use super::installer::{LaunchArtifact, LoaderInstaller};
use crate::core::downloader::download_file;
use crate::core::error::ProvisionResult;
use crate::core::java::ProcessCommand;

/// Always serves the newest universal installer.
pub const QUILT_INSTALLER_URL: &str =
    "https://quiltmc.org/api/v1/download-latest-installer/java-universal";
pub const QUILT_SERVER_JAR: &str = "quilt-server-launch.jar";
const QUILT_INSTALLER_FILE: &str = "quilt-installer.jar";

/// Installs Quilt loader via the Quilt universal installer (nearly identical to Fabric's flow).
pub struct QuiltInstaller;

impl QuiltInstaller {
    fn installer_args(ctx: &InstallContext<'_>, loader_version: &str) -> Vec<String> {
        vec![
            "install".to_string(),
            "server".to_string(),
            ctx.minecraft_version.to_string(),
            loader_version.to_string(),
            format!("--install-dir={}", ctx.server_dir().display()),
            "--download-server".to_string(),
        ]
    }
}

#[async_trait::async_trait]
impl LoaderInstaller for QuiltInstaller {
    async fn install(&self, ctx: &InstallContext<'_>) -> ProvisionResult<LaunchArtifact> {
        let loader_version = ctx.require_loader_version("Quilt")?;
        info!(
            "Installing Quilt loader {} for MC {}",
            loader_version, ctx.minecraft_version
        );

        let installer_path = ctx.installer_path(QUILT_INSTALLER_FILE);
        download_file(ctx.fetcher, QUILT_INSTALLER_URL, &installer_path).await?;

        let command = ProcessCommand::java_jar(
            ctx.java_bin,
            &installer_path,
            Self::installer_args(ctx, loader_version),
            ctx.work_dir.root(),
        );
        ctx.runner.run(&command)?;

        info!("Quilt installed successfully");
        Ok(LaunchArtifact::JarFile(QUILT_SERVER_JAR.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::WorkDir;
    use crate::core::testing::{install_context, MemoryFetcher, RecordingRunner};

    #[tokio::test]
    async fn installs_into_server_dir_with_download_flag() {
        let dir = tempfile::tempdir().unwrap();
        let work_dir = WorkDir::open(dir.path()).unwrap();
        let fetcher = MemoryFetcher::new().with(QUILT_INSTALLER_URL, b"jar".to_vec());
        let runner = RecordingRunner::new();

        let artifact = QuiltInstaller
            .install(&install_context(
                "1.20.1",
                Some("0.23.1"),
                &work_dir,
                &fetcher,
                &runner,
            ))
            .await
            .unwrap();

        assert_eq!(artifact, LaunchArtifact::JarFile("quilt-server-launch.jar".into()));
        let calls = runner.calls();
        let args = &calls[0].args;
        assert_eq!(&args[2..6], ["install", "server", "1.20.1", "0.23.1"]);
        assert_eq!(
            args[6],
            format!("--install-dir={}", work_dir.server_dir().display())
        );
        assert_eq!(args[7], "--download-server");
    }
}
