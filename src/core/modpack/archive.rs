use std::path::Path;

use tracing::{debug, info};

use crate::core::error::{ProvisionError, ProvisionResult};

/// Extract a `.mrpack` (a plain zip) into `destination`, overwriting what is
/// already there. Entries that would escape `destination` are rejected.
pub fn extract_archive(archive_path: &Path, destination: &Path) -> ProvisionResult<usize> {
    let zip_file = std::fs::File::open(archive_path).map_err(|e| ProvisionError::io(archive_path, e))?;
    let mut archive = zip::ZipArchive::new(zip_file)?;
    let mut extracted = 0;

    for index in 0..archive.len() {
        let mut zipped = archive.by_index(index)?;
        let rel_path = zipped.enclosed_name().ok_or_else(|| {
            ProvisionError::Manifest(format!("unsafe archive entry path: {}", zipped.name()))
        })?;

        let out_path = destination.join(rel_path);
        if zipped.is_dir() {
            std::fs::create_dir_all(&out_path).map_err(|e| ProvisionError::io(&out_path, e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ProvisionError::io(parent, e))?;
        }

        let mut out = std::fs::File::create(&out_path).map_err(|e| ProvisionError::io(&out_path, e))?;
        std::io::copy(&mut zipped, &mut out).map_err(|e| ProvisionError::io(&out_path, e))?;
        debug!("Extracted {:?}", out_path);
        extracted += 1;
    }

    info!(
        "Extracted {} files from {:?} into {:?}",
        extracted, archive_path, destination
    );
    Ok(extracted)
}
