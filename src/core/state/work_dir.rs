use std::path::{Path, PathBuf};

use crate::core::error::{ProvisionError, ProvisionResult};

pub const ARCHIVE_FILE: &str = "modpack.mrpack";
pub const INDEX_FILE: &str = "modrinth.index.json";
pub const OVERRIDES_DIR: &str = "overrides";
pub const SERVER_OVERRIDES_DIR: &str = "server-overrides";
pub const SERVER_DIR: &str = "server";

/// Handle on the shared working directory every action reads and writes.
///
/// Layout:
/// - `modpack.mrpack`      — downloaded archive
/// - `modrinth.index.json` — extracted index
/// - `overrides/`          — extracted static files
/// - `server-overrides/`   — extracted server-only static files
/// - `server/`             — the provisioned server
#[derive(Debug, Clone)]
pub struct WorkDir {
    root: PathBuf,
}

impl WorkDir {
    /// Open an existing directory, resolving it to an absolute path so it can
    /// be handed to installers running elsewhere.
    pub fn open(root: impl AsRef<Path>) -> ProvisionResult<Self> {
        let root = root.as_ref();
        let root = std::fs::canonicalize(root).map_err(|e| ProvisionError::io(root, e))?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn archive_path(&self) -> PathBuf {
        self.root.join(ARCHIVE_FILE)
    }

    pub fn index_path(&self) -> PathBuf {
        self.root.join(INDEX_FILE)
    }

    pub fn overrides_dir(&self) -> PathBuf {
        self.root.join(OVERRIDES_DIR)
    }

    pub fn server_overrides_dir(&self) -> PathBuf {
        self.root.join(SERVER_OVERRIDES_DIR)
    }

    pub fn server_dir(&self) -> PathBuf {
        self.root.join(SERVER_DIR)
    }

    pub fn ensure_server_dir(&self) -> ProvisionResult<PathBuf> {
        let dir = self.server_dir();
        std::fs::create_dir_all(&dir).map_err(|e| ProvisionError::io(&dir, e))?;
        Ok(dir)
    }
}
