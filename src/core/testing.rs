//! In-memory collaborators for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::core::downloader::Fetch;
use crate::core::error::{ProvisionError, ProvisionResult};
use crate::core::java::{ProcessCommand, ProcessRunner};
use crate::core::loaders::InstallContext;
use crate::core::state::WorkDir;

/// Serves canned bodies by URL; unknown URLs answer 404.
#[derive(Default)]
pub struct MemoryFetcher {
    responses: HashMap<String, Vec<u8>>,
    requested: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(url.to_string(), body.into());
        self
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl Fetch for MemoryFetcher {
    async fn get(&self, url: &str) -> ProvisionResult<Vec<u8>> {
        self.requested.lock().unwrap().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| ProvisionError::DownloadFailed {
                url: url.to_string(),
                status: 404,
            })
    }
}

type SideEffect = Box<dyn Fn(&ProcessCommand) + Send + Sync>;

/// Records every command and optionally simulates the installer's output.
#[derive(Default)]
pub struct RecordingRunner {
    calls: Mutex<Vec<ProcessCommand>>,
    side_effect: Option<SideEffect>,
    exit_code: Option<i32>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_run(mut self, effect: impl Fn(&ProcessCommand) + Send + Sync + 'static) -> Self {
        self.side_effect = Some(Box::new(effect));
        self
    }

    pub fn failing_with(mut self, code: i32) -> Self {
        self.exit_code = Some(code);
        self
    }

    pub fn calls(&self) -> Vec<ProcessCommand> {
        self.calls.lock().unwrap().clone()
    }
}

impl ProcessRunner for RecordingRunner {
    fn run(&self, command: &ProcessCommand) -> ProvisionResult<()> {
        self.calls.lock().unwrap().push(command.clone());
        if let Some(code) = self.exit_code {
            return Err(ProvisionError::InstallerExit {
                installer: command.display_name(),
                code: Some(code),
            });
        }
        if let Some(effect) = &self.side_effect {
            effect(command);
        }
        Ok(())
    }
}

pub fn install_context<'a>(
    minecraft_version: &'a str,
    loader_version: Option<&'a str>,
    work_dir: &'a WorkDir,
    fetcher: &'a MemoryFetcher,
    runner: &'a RecordingRunner,
) -> InstallContext<'a> {
    InstallContext {
        minecraft_version,
        loader_version,
        work_dir,
        fetcher,
        runner,
        java_bin: "java",
    }
}
