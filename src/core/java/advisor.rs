use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::error::{ProvisionError, ProvisionResult};

/// Marker file consumed by the image build to pick the JRE package.
pub const JAVA_VERSION_FILE: &str = "java-version";

/// Ascending minor-version breakpoints and the Alpine runtime package each one needs.
const JAVA_PACKAGES: &[(u32, &str)] = &[
    (8, "openjdk8-jre-base"),
    (17, "openjdk17-jre-headless"),
    (20, "openjdk21-jre-headless"),
];

/// Minor component of a Minecraft release id (`1.20.1` → 20).
pub fn minor_version(minecraft_version: &str) -> ProvisionResult<u32> {
    minecraft_version
        .split('.')
        .nth(1)
        .and_then(|minor| minor.parse::<u32>().ok())
        .ok_or_else(|| {
            ProvisionError::Resolution(format!(
                "cannot read a minor version from Minecraft version {}",
                minecraft_version
            ))
        })
}

/// Package for the highest breakpoint not above `minor`; the lowest entry otherwise.
pub fn recommended_package(minor: u32) -> &'static str {
    JAVA_PACKAGES
        .iter()
        .rev()
        .find(|(breakpoint, _)| *breakpoint <= minor)
        .unwrap_or(&JAVA_PACKAGES[0])
        .1
}

/// Runtime package for a Minecraft release id. Fails on ids without a numeric minor
/// component, so callers can reject a pack before installing anything.
pub fn java_package_for(minecraft_version: &str) -> ProvisionResult<&'static str> {
    let package = recommended_package(minor_version(minecraft_version)?);
    info!("Recommended Java package for {}: {}", minecraft_version, package);
    Ok(package)
}

/// Write `package` into `<server_dir>/java-version`.
pub fn write_java_version(server_dir: &Path, package: &str) -> ProvisionResult<PathBuf> {
    let path = server_dir.join(JAVA_VERSION_FILE);
    std::fs::write(&path, package).map_err(|e| ProvisionError::io(&path, e))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn java_package_thresholds() {
        assert_eq!(recommended_package(16), "openjdk8-jre-base");
        assert_eq!(recommended_package(17), "openjdk17-jre-headless");
        assert_eq!(recommended_package(19), "openjdk17-jre-headless");
        assert_eq!(recommended_package(20), "openjdk21-jre-headless");
        assert_eq!(recommended_package(21), "openjdk21-jre-headless");
    }

    #[test]
    fn below_every_breakpoint_uses_lowest_entry() {
        assert_eq!(recommended_package(5), "openjdk8-jre-base");
        assert_eq!(recommended_package(0), "openjdk8-jre-base");
    }

    #[test]
    fn minor_version_parsing() {
        assert_eq!(minor_version("1.20.1").unwrap(), 20);
        assert_eq!(minor_version("1.21").unwrap(), 21);
        assert_eq!(minor_version("1.7.10").unwrap(), 7);
        assert!(minor_version("24w14a").is_err());
    }

    #[test]
    fn package_for_release_ids() {
        assert_eq!(java_package_for("1.16.5").unwrap(), "openjdk8-jre-base");
        assert_eq!(java_package_for("1.20.1").unwrap(), "openjdk21-jre-headless");
        assert!(matches!(
            java_package_for("23w31a"),
            Err(ProvisionError::Resolution(_))
        ));
    }

    #[test]
    fn writes_marker_file() {
        let dir = tempfile::tempdir().unwrap();
        let package = java_package_for("1.16.5").unwrap();
        let path = write_java_version(dir.path(), package).unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "openjdk8-jre-base");
    }
}
