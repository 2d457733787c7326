use std::path::PathBuf;

use crate::core::downloader::Fetch;
use crate::core::error::{ProvisionError, ProvisionResult};
use crate::core::java::ProcessRunner;
use crate::core::state::WorkDir;

/// Full install context.
/// Lets installers grow without touching the dispatch API.
pub struct InstallContext<'a> {
    pub minecraft_version: &'a str,
    pub loader_version: Option<&'a str>,
    pub work_dir: &'a WorkDir,
    pub fetcher: &'a dyn Fetch,
    pub runner: &'a dyn ProcessRunner,
    pub java_bin: &'a str,
}

impl InstallContext<'_> {
    /// Loader version for installers that cannot run without one.
    pub fn require_loader_version(&self, loader: &str) -> ProvisionResult<&str> {
        self.loader_version.ok_or_else(|| {
            ProvisionError::Resolution(format!("{} requires a loader version", loader))
        })
    }

    pub fn server_dir(&self) -> PathBuf {
        self.work_dir.server_dir()
    }

    /// Installers are staged beside `server/`, never inside it.
    pub fn installer_path(&self, file_name: &str) -> PathBuf {
        self.work_dir.root().join(file_name)
    }
}
