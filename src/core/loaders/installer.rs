use async_trait::async_trait;

use crate::core::error::ProvisionResult;

use super::resolver::LoaderType;
use super::{
    context::InstallContext, fabric::FabricInstaller, forge::ForgeInstaller,
    neoforge::NeoForgeInstaller, quilt::QuiltInstaller, vanilla::VanillaInstaller,
};

/// What `start.sh` has to launch once a loader is installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LaunchArtifact {
    /// Jar in `server/` started with `-jar <name> nogui`.
    JarFile(String),
    /// Argument string appended verbatim after the JVM flags.
    RawArguments(String),
}

impl LaunchArtifact {
    pub fn launch_suffix(&self) -> String {
        match self {
            LaunchArtifact::JarFile(jar) => format!("-jar {} nogui", jar),
            LaunchArtifact::RawArguments(args) => args.clone(),
        }
    }
}

#[async_trait]
pub trait LoaderInstaller: Send + Sync {
    async fn install(&self, ctx: &InstallContext<'_>) -> ProvisionResult<LaunchArtifact>;
}

/// Closed dispatcher over the supported loader families, no `Box<dyn>`.
pub enum Installer {
    Vanilla(VanillaInstaller),
    Fabric(FabricInstaller),
    Forge(ForgeInstaller),
    Quilt(QuiltInstaller),
    NeoForge(NeoForgeInstaller),
}

impl Installer {
    pub fn new(loader: LoaderType) -> Self {
        match loader {
            LoaderType::Vanilla => Self::Vanilla(VanillaInstaller),
            LoaderType::Fabric => Self::Fabric(FabricInstaller),
            LoaderType::Forge => Self::Forge(ForgeInstaller),
            LoaderType::Quilt => Self::Quilt(QuiltInstaller),
            LoaderType::NeoForge => Self::NeoForge(NeoForgeInstaller),
        }
    }

    pub async fn install(&self, ctx: &InstallContext<'_>) -> ProvisionResult<LaunchArtifact> {
        match self {
            Installer::Vanilla(i) => i.install(ctx).await,
            Installer::Fabric(i) => i.install(ctx).await,
            Installer::Forge(i) => i.install(ctx).await,
            Installer::Quilt(i) => i.install(ctx).await,
            Installer::NeoForge(i) => i.install(ctx).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_suffixes() {
        assert_eq!(
            LaunchArtifact::JarFile("server.jar".into()).launch_suffix(),
            "-jar server.jar nogui"
        );
        assert_eq!(
            LaunchArtifact::RawArguments("@libraries/x/unix_args.txt nogui".into()).launch_suffix(),
            "@libraries/x/unix_args.txt nogui"
        );
    }
}
