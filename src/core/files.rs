use std::path::{Component, Path, PathBuf};

use crate::core::error::{ProvisionError, ProvisionResult};

/// Merge `source` into `destination`, creating directories as needed and
/// overwriting files that already exist.
pub fn copy_dir_recursive(source: &Path, destination: &Path) -> ProvisionResult<()> {
    std::fs::create_dir_all(destination).map_err(|e| ProvisionError::io(destination, e))?;

    for entry in std::fs::read_dir(source).map_err(|e| ProvisionError::io(source, e))? {
        let entry = entry.map_err(|e| ProvisionError::io(source, e))?;
        let src_path = entry.path();
        let dst_path = destination.join(entry.file_name());
        let file_type = entry
            .file_type()
            .map_err(|e| ProvisionError::io(&src_path, e))?;

        if file_type.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else if file_type.is_file() {
            std::fs::copy(&src_path, &dst_path).map_err(|e| ProvisionError::io(&dst_path, e))?;
        }
    }

    Ok(())
}

/// Regular files directly inside `dir` named `<prefix>*<suffix>`, sorted.
pub fn matching_files(dir: &Path, prefix: &str, suffix: &str) -> ProvisionResult<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(|e| ProvisionError::io(dir, e))? {
        let entry = entry.map_err(|e| ProvisionError::io(dir, e))?;
        let name = entry.file_name().to_string_lossy().to_string();
        if name.len() < prefix.len() + suffix.len() {
            continue;
        }
        if name.starts_with(prefix) && name.ends_with(suffix) && entry.path().is_file() {
            matches.push(entry.path());
        }
    }
    matches.sort();
    Ok(matches)
}

/// Remove a file when present. Returns whether anything was deleted.
pub fn remove_if_exists(path: &Path) -> ProvisionResult<bool> {
    if !path.exists() {
        return Ok(false);
    }
    std::fs::remove_file(path).map_err(|e| ProvisionError::io(path, e))?;
    Ok(true)
}

/// `chmod 744` on unix; a no-op elsewhere.
pub fn make_executable(path: &Path) -> ProvisionResult<()> {
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let perms = std::fs::Permissions::from_mode(0o744);
        std::fs::set_permissions(path, perms).map_err(|e| ProvisionError::io(path, e))?;
    }
    #[cfg(not(unix))]
    let _ = path;
    Ok(())
}

/// A relative path that stays inside the directory it is joined onto.
pub fn is_contained_relative(path: &str) -> bool {
    let path = Path::new(path);
    !path.as_os_str().is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
