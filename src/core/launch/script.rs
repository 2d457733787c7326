use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::error::{ProvisionError, ProvisionResult};
use crate::core::files::make_executable;
use crate::core::loaders::LaunchArtifact;
use crate::core::state::ServerConfig;

pub const START_SCRIPT: &str = "start.sh";

/// Render `start.sh`. Flag strings are passed through untouched, so an empty
/// `additional_start_args` leaves a double space.
pub fn render_start_script(artifact: &LaunchArtifact, config: &ServerConfig) -> String {
    format!(
        "#!/bin/sh\njava -server -Xmx{} -Xms{} {} {} {}",
        config.max_ram,
        config.min_ram,
        config.typical_start_args,
        config.additional_start_args,
        artifact.launch_suffix()
    )
}

/// Write `<server_dir>/start.sh` and mark it executable.
pub fn write_start_script(
    server_dir: &Path,
    artifact: &LaunchArtifact,
    config: &ServerConfig,
) -> ProvisionResult<PathBuf> {
    let path = server_dir.join(START_SCRIPT);
    std::fs::write(&path, render_start_script(artifact, config))
        .map_err(|e| ProvisionError::io(&path, e))?;
    make_executable(&path)?;
    info!("Wrote start script {:?}", path);
    Ok(path)
}
