use std::path::Path;

use tracing::{debug, info};

use super::context::InstallContext;
use super::installer::{LaunchArtifact, LoaderInstaller};
use crate::core::downloader::download_file;
use crate::core::error::{ProvisionError, ProvisionResult};
use crate::core::files::remove_if_exists;
use crate::core::java::ProcessCommand;
use crate::core::maven::NEOFORGE_MAVEN;

const NEOFORGE_INSTALLER_FILE: &str = "neoforge-installer.jar";

/// Launch scripts and JVM argument file the installer writes; `start.sh` replaces them.
const SUPERSEDED_FILES: &[&str] = &["run.sh", "run.bat", "user_jvm_args.txt"];

/// Installs NeoForge via its installer and launches through the generated
/// per-version argument file instead of a plain jar.
pub struct NeoForgeInstaller;

/// Minecraft release whose NeoForge builds live under `net.neoforged:forge`.
const LEGACY_MINECRAFT_VERSION: &str = "1.20.1";

/// Maven artifact and version of one NeoForge build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NeoForgeCoordinate {
    pub artifact: &'static str,
    pub version: String,
}

impl NeoForgeCoordinate {
    /// NeoForge for MC 1.20.1 was published as `net.neoforged:forge:1.20.1-<build>`;
    /// later releases use `net.neoforged:neoforge:<build>`. Packs may list the
    /// legacy build with or without the `1.20.1-` prefix.
    pub fn new(minecraft_version: &str, loader_version: &str) -> Self {
        if minecraft_version == LEGACY_MINECRAFT_VERSION {
            let prefix = format!("{}-", LEGACY_MINECRAFT_VERSION);
            let version = if loader_version.starts_with(&prefix) {
                loader_version.to_string()
            } else {
                format!("{}{}", prefix, loader_version)
            };
            Self {
                artifact: "forge",
                version,
            }
        } else {
            Self {
                artifact: "neoforge",
                version: loader_version.to_string(),
            }
        }
    }

    pub fn installer_url(&self) -> String {
        format!(
            "{}/net/neoforged/{a}/{v}/{a}-{v}-installer.jar",
            NEOFORGE_MAVEN,
            a = self.artifact,
            v = self.version
        )
    }

    /// Per-version argument file, relative to `server/`.
    pub fn args_file(&self) -> String {
        format!(
            "libraries/net/neoforged/{}/{}/unix_args.txt",
            self.artifact, self.version
        )
    }

    /// `@<args file> nogui`.
    pub fn launch_arguments(&self) -> String {
        format!("@{} nogui", self.args_file())
    }
}

impl NeoForgeInstaller {
    fn remove_superseded(server_dir: &Path) -> ProvisionResult<()> {
        for name in SUPERSEDED_FILES {
            let path = server_dir.join(name);
            if remove_if_exists(&path)? {
                debug!("Removed installer-generated {:?}", path);
            }
        }
        let install_log = server_dir.join(format!("{}.log", NEOFORGE_INSTALLER_FILE));
        remove_if_exists(&install_log)?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl LoaderInstaller for NeoForgeInstaller {
    async fn install(&self, ctx: &InstallContext<'_>) -> ProvisionResult<LaunchArtifact> {
        let loader_version = ctx.require_loader_version("NeoForge")?;
        info!(
            "Installing NeoForge {} for MC {}",
            loader_version, ctx.minecraft_version
        );

        let coordinate = NeoForgeCoordinate::new(ctx.minecraft_version, loader_version);
        let installer_path = ctx.installer_path(NEOFORGE_INSTALLER_FILE);
        download_file(ctx.fetcher, &coordinate.installer_url(), &installer_path).await?;

        let server_dir = ctx.server_dir();
        let command = ProcessCommand::java_jar(
            ctx.java_bin,
            &installer_path,
            vec!["--installServer".to_string()],
            &server_dir,
        );
        ctx.runner.run(&command)?;

        let args_file = coordinate.args_file();
        if !server_dir.join(&args_file).is_file() {
            return Err(ProvisionError::Install(format!(
                "NeoForge installer did not produce {}",
                args_file
            )));
        }

        Self::remove_superseded(&server_dir)?;

        info!("NeoForge {} installed successfully", loader_version);
        Ok(LaunchArtifact::RawArguments(coordinate.launch_arguments()))
    }
}
