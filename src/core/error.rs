use std::path::PathBuf;
use thiserror::Error;

/// Central error type for the provisioning pipeline.
/// Every module returns `Result<T, ProvisionError>`; every variant is fatal.
#[derive(Debug, Error)]
pub enum ProvisionError {
    // ── Manifest ────────────────────────────────────────
    #[error("Modpack index error: {0}")]
    Manifest(String),

    #[error("Modpack index is missing required key `{0}`")]
    MissingKey(String),

    // ── Resolution ──────────────────────────────────────
    #[error("Resolution error: {0}")]
    Resolution(String),

    #[error("Minecraft version {0} not found in version manifest")]
    VersionNotFound(String),

    // ── Network ─────────────────────────────────────────
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Download failed for {url}: HTTP {status}")]
    DownloadFailed { url: String, status: u16 },

    // ── Install ─────────────────────────────────────────
    #[error("Install error: {0}")]
    Install(String),

    #[error("{installer} exited with status {code:?}")]
    InstallerExit {
        installer: String,
        code: Option<i32>,
    },

    // ── Config ──────────────────────────────────────────
    #[error("Configuration error: {0}")]
    Config(String),

    // ── IO ──────────────────────────────────────────────
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    // ── JSON ────────────────────────────────────────────
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ── Archive ─────────────────────────────────────────
    #[error("Zip extraction error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// Convenience alias used throughout the crate.
pub type ProvisionResult<T> = Result<T, ProvisionError>;

impl ProvisionError {
    /// Taxonomy class reported on the final log line before exiting.
    pub fn kind(&self) -> &'static str {
        match self {
            ProvisionError::Manifest(_) | ProvisionError::MissingKey(_) => "manifest",
            ProvisionError::Resolution(_) | ProvisionError::VersionNotFound(_) => "resolution",
            ProvisionError::Http(_) | ProvisionError::DownloadFailed { .. } => "fetch",
            ProvisionError::Install(_) | ProvisionError::InstallerExit { .. } => "install",
            ProvisionError::Config(_) => "config",
            ProvisionError::Io { .. } | ProvisionError::Json(_) | ProvisionError::Zip(_) => "io",
        }
    }

    /// Attach a path to an IO error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ProvisionError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<std::io::Error> for ProvisionError {
    fn from(source: std::io::Error) -> Self {
        ProvisionError::Io {
            path: PathBuf::new(),
            source,
        }
    }
}
