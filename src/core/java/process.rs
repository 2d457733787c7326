use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::info;

use crate::core::error::{ProvisionError, ProvisionResult};

/// A fully described subprocess invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessCommand {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: PathBuf,
}

impl ProcessCommand {
    /// `<java> -jar <jar> <args...>` run from `cwd`.
    pub fn java_jar(java_bin: &str, jar: &Path, args: Vec<String>, cwd: &Path) -> Self {
        let mut full_args = vec!["-jar".to_string(), jar.to_string_lossy().to_string()];
        full_args.extend(args);
        Self {
            program: java_bin.to_string(),
            args: full_args,
            cwd: cwd.to_path_buf(),
        }
    }

    /// Short label used in logs and errors: the jar name when there is one.
    pub fn display_name(&self) -> String {
        match self.args.iter().position(|a| a == "-jar") {
            Some(i) => self
                .args
                .get(i + 1)
                .and_then(|jar| Path::new(jar).file_name())
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| self.program.clone()),
            None => self.program.clone(),
        }
    }
}

/// Process-execution capability. Runs to completion; a non-zero exit is an error.
pub trait ProcessRunner: Send + Sync {
    fn run(&self, command: &ProcessCommand) -> ProvisionResult<()>;
}

/// Runs installers with the host JVM, inheriting stdout/stderr so the
/// installer's own progress lands in the build log.
pub struct JavaProcess;

impl ProcessRunner for JavaProcess {
    fn run(&self, command: &ProcessCommand) -> ProvisionResult<()> {
        info!(
            "Running {} {} (cwd {:?})",
            command.program,
            command.args.join(" "),
            command.cwd
        );

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(&command.cwd)
            .status()
            .map_err(|e| {
                ProvisionError::Install(format!("failed to spawn {}: {}", command.program, e))
            })?;

        if !status.success() {
            return Err(ProvisionError::InstallerExit {
                installer: command.display_name(),
                code: status.code(),
            });
        }

        Ok(())
    }
}
