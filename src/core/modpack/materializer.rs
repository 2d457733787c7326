use tracing::{debug, info};

use crate::core::downloader::{download_file, Fetch};
use crate::core::error::{ProvisionError, ProvisionResult};
use crate::core::files::{copy_dir_recursive, is_contained_relative};
use crate::core::state::{ServerConfig, WorkDir};

use super::index::{EnvRequirement, ModFile, ModrinthIndex};

/// Whether a file with the given server requirement should be installed.
///
/// Optional files need an explicit `INSTALL_OPTIONAL_MODS` decision.
pub fn should_install(
    requirement: EnvRequirement,
    install_optional: Option<bool>,
) -> ProvisionResult<bool> {
    match requirement {
        EnvRequirement::Required => Ok(true),
        EnvRequirement::Unsupported => Ok(false),
        EnvRequirement::Optional => install_optional.ok_or_else(|| {
            ProvisionError::Config(
                "the pack has optional server mods; set INSTALL_OPTIONAL_MODS (1 to install them)"
                    .into(),
            )
        }),
    }
}

/// Download every selected file into `server/`, then merge the static
/// override trees over it. Returns `"<name> <versionId>"`.
///
/// Any failure aborts; files already written stay in place.
pub async fn materialize_mods(
    index: &ModrinthIndex,
    work_dir: &WorkDir,
    config: &ServerConfig,
    fetcher: &dyn Fetch,
) -> ProvisionResult<String> {
    let selected = select_files(index, config.install_optional_mods)?;
    let server_dir = work_dir.ensure_server_dir()?;

    info!(
        "Installing {} of {} files from {}",
        selected.len(),
        index.files.len(),
        index.display_name()
    );

    for file in selected {
        let url = file.primary_download()?;
        let dest = server_dir.join(&file.path);
        download_file(fetcher, url, &dest).await?;
        // Hashes in the index are not checked.
    }

    for overrides in [work_dir.overrides_dir(), work_dir.server_overrides_dir()] {
        if overrides.is_dir() {
            info!("Merging {:?} into {:?}", overrides, server_dir);
            copy_dir_recursive(&overrides, &server_dir)?;
        } else {
            debug!("No {:?} to merge", overrides);
        }
    }

    Ok(index.display_name())
}

/// Apply the env policy and validate destinations before anything is fetched.
fn select_files(
    index: &ModrinthIndex,
    install_optional: Option<bool>,
) -> ProvisionResult<Vec<&ModFile>> {
    let mut selected = Vec::new();
    for file in &index.files {
        let requirement = file.server_requirement()?;
        if !should_install(requirement, install_optional)? {
            debug!("Skipping {} (server: {:?})", file.path, requirement);
            continue;
        }
        if !is_contained_relative(&file.path) {
            return Err(ProvisionError::Manifest(format!(
                "file path {} escapes the server directory",
                file.path
            )));
        }
        selected.push(file);
    }
    Ok(selected)
}
