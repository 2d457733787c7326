use std::sync::Arc;

use crate::core::downloader::{Downloader, Fetch};
use crate::core::error::ProvisionResult;
use crate::core::java::{JavaProcess, ProcessRunner};

use super::{ServerConfig, WorkDir};

/// Everything an action needs, built once in `main` and passed down.
pub struct AppState {
    pub work_dir: WorkDir,
    pub config: ServerConfig,
    pub fetcher: Arc<dyn Fetch>,
    pub runner: Arc<dyn ProcessRunner>,
}

impl AppState {
    pub fn new(work_dir: WorkDir, config: ServerConfig) -> ProvisionResult<Self> {
        Ok(Self::with_collaborators(
            work_dir,
            config,
            Arc::new(Downloader::new()?),
            Arc::new(JavaProcess),
        ))
    }

    pub fn with_collaborators(
        work_dir: WorkDir,
        config: ServerConfig,
        fetcher: Arc<dyn Fetch>,
        runner: Arc<dyn ProcessRunner>,
    ) -> Self {
        Self {
            work_dir,
            config,
            fetcher,
            runner,
        }
    }
}
