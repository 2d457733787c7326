use std::collections::HashMap;

use tracing::{info, warn};

use crate::core::error::{ProvisionError, ProvisionResult};

pub const MINECRAFT_DEPENDENCY: &str = "minecraft";

/// Supported mod loaders, strongly typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoaderType {
    Vanilla,
    Fabric,
    Forge,
    Quilt,
    NeoForge,
}

/// Loader keys checked against the index dependencies, highest priority first.
pub const SUPPORTED_LOADERS: [LoaderType; 4] = [
    LoaderType::Fabric,
    LoaderType::Forge,
    LoaderType::Quilt,
    LoaderType::NeoForge,
];

impl LoaderType {
    /// Key used in `modrinth.index.json` dependencies.
    pub fn dependency_key(&self) -> &'static str {
        match self {
            LoaderType::Vanilla => MINECRAFT_DEPENDENCY,
            LoaderType::Fabric => "fabric-loader",
            LoaderType::Forge => "forge",
            LoaderType::Quilt => "quilt-loader",
            LoaderType::NeoForge => "neoforge",
        }
    }
}

impl std::fmt::Display for LoaderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoaderType::Vanilla => write!(f, "vanilla"),
            LoaderType::Fabric => write!(f, "fabric"),
            LoaderType::Forge => write!(f, "forge"),
            LoaderType::Quilt => write!(f, "quilt"),
            LoaderType::NeoForge => write!(f, "neoforge"),
        }
    }
}

/// The single loader a run installs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSelection {
    pub loader: LoaderType,
    /// `None` exactly when `loader` is vanilla.
    pub loader_version: Option<String>,
    pub minecraft_version: String,
}

impl LoaderSelection {
    /// First supported loader key present wins; none present means vanilla.
    /// The `minecraft` key is mandatory.
    pub fn from_dependencies(dependencies: &HashMap<String, String>) -> ProvisionResult<Self> {
        let minecraft_version = dependencies
            .get(MINECRAFT_DEPENDENCY)
            .cloned()
            .ok_or_else(|| ProvisionError::MissingKey(MINECRAFT_DEPENDENCY.into()))?;

        for loader in SUPPORTED_LOADERS {
            if let Some(version) = dependencies.get(loader.dependency_key()) {
                info!("Selected {} {} for Minecraft {}", loader, version, minecraft_version);
                return Ok(Self {
                    loader,
                    loader_version: Some(version.clone()),
                    minecraft_version,
                });
            }
        }

        warn!("No mod loader found in dependencies, installing vanilla server");
        Ok(Self {
            loader: LoaderType::Vanilla,
            loader_version: None,
            minecraft_version,
        })
    }

    /// `"forge-47.2.0 for 1.20.1"`, or `"vanilla for 1.20.1"`.
    pub fn summary(&self) -> String {
        match &self.loader_version {
            Some(version) => format!("{}-{} for {}", self.loader, version, self.minecraft_version),
            None => format!("{} for {}", self.loader, self.minecraft_version),
        }
    }
}
