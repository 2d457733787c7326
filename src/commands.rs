use tracing::info;

use crate::core::downloader::download_file;
use crate::core::error::{ProvisionError, ProvisionResult};
use crate::core::java::{java_package_for, write_java_version};
use crate::core::launch::write_start_script;
use crate::core::loaders::{InstallContext, Installer, LoaderSelection};
use crate::core::modpack::{
    extract_archive, materialize_mods, resolve_pack_version, ModrinthIndex, PackDependencies,
};
use crate::core::state::AppState;

/// One CLI action over the shared working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Fetch (unless already present) and extract the pack archive.
    Mrpack { source: Option<String> },
    /// Download the pack's server files and merge overrides.
    Mods,
    /// Install the loader, write `start.sh` and `java-version`.
    Server,
}

impl Action {
    pub fn parse(action: &str, args: &[String]) -> ProvisionResult<Self> {
        match action {
            "mrpack" => Ok(Action::Mrpack {
                source: args.first().cloned(),
            }),
            "mods" => Ok(Action::Mods),
            "server" => Ok(Action::Server),
            other => Err(ProvisionError::Config(format!(
                "invalid action `{}` (expected mrpack, mods or server)",
                other
            ))),
        }
    }
}

pub async fn execute(state: &AppState, action: Action) -> ProvisionResult<String> {
    match action {
        Action::Mrpack { source } => mrpack(state, source.as_deref()).await,
        Action::Mods => mods(state).await,
        Action::Server => server(state).await,
    }
}

/// `mrpack [<source>]`
pub async fn mrpack(state: &AppState, source: Option<&str>) -> ProvisionResult<String> {
    let archive = state.work_dir.archive_path();

    if archive.exists() {
        info!("Modpack already available at {:?}, skipping download", archive);
    } else {
        let source = source.ok_or_else(|| {
            ProvisionError::Config(
                "no modpack.mrpack present; pass a Modrinth project or version id".into(),
            )
        })?;
        let version = resolve_pack_version(state.fetcher.as_ref(), source).await?;
        let file = version.primary_file()?;
        info!("Downloading {} ({})", file.filename, version.id);
        download_file(state.fetcher.as_ref(), &file.url, &archive).await?;
    }

    let count = extract_archive(&archive, state.work_dir.root())?;
    Ok(format!("Extracted {} files from {}", count, archive.display()))
}

/// `mods`
pub async fn mods(state: &AppState) -> ProvisionResult<String> {
    state.work_dir.ensure_server_dir()?;
    let index = ModrinthIndex::read(&state.work_dir.index_path())?;
    let name = materialize_mods(&index, &state.work_dir, &state.config, state.fetcher.as_ref()).await?;
    info!("Installed mods for {}", name);
    Ok(name)
}

/// `server`
pub async fn server(state: &AppState) -> ProvisionResult<String> {
    let pack = PackDependencies::read(&state.work_dir.index_path())?;
    let selection = LoaderSelection::from_dependencies(&pack.dependencies)?;
    let java_package = java_package_for(&selection.minecraft_version)?;
    let server_dir = state.work_dir.ensure_server_dir()?;

    let ctx = InstallContext {
        minecraft_version: &selection.minecraft_version,
        loader_version: selection.loader_version.as_deref(),
        work_dir: &state.work_dir,
        fetcher: state.fetcher.as_ref(),
        runner: state.runner.as_ref(),
        java_bin: &state.config.java_bin,
    };
    let artifact = Installer::new(selection.loader).install(&ctx).await?;

    write_start_script(&server_dir, &artifact, &state.config)?;
    write_java_version(&server_dir, java_package)?;

    let summary = selection.summary();
    info!("Server ready: {}", summary);
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::core::java::ProcessCommand;
    use crate::core::modpack::archive::tests::write_zip;
    use crate::core::state::{ServerConfig, WorkDir, DEFAULT_TYPICAL_START_ARGS};
    use crate::core::testing::{MemoryFetcher, RecordingRunner};

    const FORGE_INSTALLER_URL: &str = "https://maven.minecraftforge.net/net/minecraftforge/forge/1.20.1-47.2.0/forge-1.20.1-47.2.0-installer.jar";

    fn state(dir: &tempfile::TempDir, fetcher: MemoryFetcher, runner: RecordingRunner) -> AppState {
        AppState::with_collaborators(
            WorkDir::open(dir.path()).unwrap(),
            ServerConfig::default(),
            Arc::new(fetcher),
            Arc::new(runner),
        )
    }

    #[test]
    fn parses_actions() {
        assert_eq!(
            Action::parse("mrpack", &["cozy".to_string()]).unwrap(),
            Action::Mrpack {
                source: Some("cozy".into())
            }
        );
        assert_eq!(
            Action::parse("mrpack", &[]).unwrap(),
            Action::Mrpack { source: None }
        );
        assert_eq!(Action::parse("mods", &[]).unwrap(), Action::Mods);
        assert_eq!(Action::parse("server", &[]).unwrap(), Action::Server);
        assert!(matches!(
            Action::parse("deploy", &[]),
            Err(ProvisionError::Config(_))
        ));
    }

    #[tokio::test]
    async fn forge_pack_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("modrinth.index.json"),
            r#"{"dependencies":{"minecraft":"1.20.1","forge":"47.2.0"}}"#,
        )
        .unwrap();
        let fetcher = MemoryFetcher::new().with(FORGE_INSTALLER_URL, b"installer".to_vec());
        let runner = RecordingRunner::new().on_run(|cmd: &ProcessCommand| {
            std::fs::write(cmd.cwd.join("forge-1.20.1-47.2.0-shim.jar"), "").unwrap();
        });
        let state = state(&dir, fetcher, runner);

        let summary = execute(&state, Action::Server).await.unwrap();

        assert_eq!(summary, "forge-47.2.0 for 1.20.1");
        let server_dir = state.work_dir.server_dir();
        assert_eq!(
            std::fs::read_to_string(server_dir.join("start.sh")).unwrap(),
            format!(
                "#!/bin/sh\njava -server -Xmx4G -Xms2G {}  -jar forge-1.20.1-47.2.0-shim.jar nogui",
                DEFAULT_TYPICAL_START_ARGS
            )
        );
        assert_eq!(
            std::fs::read_to_string(server_dir.join("java-version")).unwrap(),
            "openjdk21-jre-headless"
        );
    }

    #[tokio::test]
    async fn server_ignores_file_entries_without_env() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("modrinth.index.json"),
            r#"{
                "name": "Bare",
                "versionId": "1",
                "files": [{ "path": "mods/a.jar", "downloads": ["https://cdn.test/a.jar"] }],
                "dependencies": { "minecraft": "1.20.1", "forge": "47.2.0" }
            }"#,
        )
        .unwrap();
        let fetcher = MemoryFetcher::new().with(FORGE_INSTALLER_URL, b"installer".to_vec());
        let runner = RecordingRunner::new().on_run(|cmd: &ProcessCommand| {
            std::fs::write(cmd.cwd.join("forge-1.20.1-47.2.0-shim.jar"), "").unwrap();
        });
        let state = state(&dir, fetcher, runner);

        let summary = server(&state).await.unwrap();

        assert_eq!(summary, "forge-47.2.0 for 1.20.1");
        assert!(state.work_dir.server_dir().join("start.sh").is_file());
    }

    #[tokio::test]
    async fn snapshot_version_fails_before_installing() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("modrinth.index.json"),
            r#"{"dependencies":{"minecraft":"23w31a","forge":"47.2.0"}}"#,
        )
        .unwrap();
        let state = state(&dir, MemoryFetcher::new(), RecordingRunner::new());

        let err = server(&state).await.unwrap_err();

        assert!(matches!(err, ProvisionError::Resolution(_)));
        assert!(!dir.path().join("forge-installer.jar").exists());
        assert!(!state.work_dir.server_dir().exists());
    }

    #[tokio::test]
    async fn server_without_minecraft_dependency_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("modrinth.index.json"),
            r#"{ "name": "x", "versionId": "1", "files": [], "dependencies": { "forge": "47.2.0" } }"#,
        )
        .unwrap();
        let state = state(&dir, MemoryFetcher::new(), RecordingRunner::new());

        let err = server(&state).await.unwrap_err();
        assert!(matches!(err, ProvisionError::MissingKey(_)));
        assert!(!state.work_dir.server_dir().join("start.sh").exists());
    }

    #[tokio::test]
    async fn mrpack_downloads_when_absent_then_extracts() {
        let dir = tempfile::tempdir().unwrap();
        let pack_path = dir.path().join("built.mrpack");
        write_zip(
            &pack_path,
            &[
                ("modrinth.index.json", b"{}"),
                ("overrides/config/a.toml", b"a = 1"),
            ],
        );
        let fetcher = MemoryFetcher::new()
            .with(
                "https://api.modrinth.com/v2/project/cozy/version",
                r#"[{ "id": "v1", "files": [{ "url": "https://cdn.test/cozy.mrpack", "filename": "cozy.mrpack", "primary": true }] }]"#,
            )
            .with("https://cdn.test/cozy.mrpack", std::fs::read(&pack_path).unwrap());
        let state = state(&dir, fetcher, RecordingRunner::new());

        mrpack(&state, Some("cozy")).await.unwrap();

        assert!(state.work_dir.archive_path().exists());
        assert!(state.work_dir.index_path().exists());
        assert!(state.work_dir.overrides_dir().join("config/a.toml").exists());
    }

    #[tokio::test]
    async fn mrpack_uses_existing_archive_without_network() {
        let dir = tempfile::tempdir().unwrap();
        write_zip(&dir.path().join("modpack.mrpack"), &[("modrinth.index.json", b"{}")]);
        let state = state(&dir, MemoryFetcher::new(), RecordingRunner::new());

        mrpack(&state, None).await.unwrap();

        assert!(state.work_dir.index_path().exists());
    }

    #[tokio::test]
    async fn mrpack_without_archive_or_source_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir, MemoryFetcher::new(), RecordingRunner::new());

        let err = mrpack(&state, None).await.unwrap_err();
        assert!(matches!(err, ProvisionError::Config(_)));
    }

    #[tokio::test]
    async fn mods_requires_index() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(&dir, MemoryFetcher::new(), RecordingRunner::new());

        let err = mods(&state).await.unwrap_err();
        assert!(matches!(err, ProvisionError::Manifest(_)));
        assert!(state.work_dir.server_dir().is_dir());
    }
}
