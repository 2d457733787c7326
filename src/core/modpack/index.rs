// ─── Modpack Index ───
// Typed view of `modrinth.index.json`. Only the keys used downstream are
// required; anything else in the document is ignored.

use std::collections::HashMap;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::core::error::{ProvisionError, ProvisionResult};

/// Top-level `modrinth.index.json`, as the `mods` action reads it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModrinthIndex {
    pub name: String,
    pub version_id: String,
    pub files: Vec<ModFile>,
}

/// The `dependencies` table alone, which is all the `server` action needs.
#[derive(Debug, Clone, Deserialize)]
pub struct PackDependencies {
    /// `minecraft` plus at most one loader key, each mapped to a version.
    pub dependencies: HashMap<String, String>,
}

/// A single downloadable file of the pack.
#[derive(Debug, Clone, Deserialize)]
pub struct ModFile {
    /// Relative destination path, e.g. `mods/lithium.jar`.
    pub path: String,
    /// Optional in the file format; the `mods` action refuses entries without it.
    #[serde(default)]
    pub env: Option<FileEnv>,
    /// Candidate URLs; only the first one is ever used.
    pub downloads: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileEnv {
    pub server: EnvRequirement,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvRequirement {
    Required,
    Optional,
    Unsupported,
}

/// Read and parse the index into `T`. A missing or malformed document is a manifest error.
fn read_document<T: DeserializeOwned>(path: &Path) -> ProvisionResult<T> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| ProvisionError::Manifest(format!("cannot read {}: {}", path.display(), e)))?;
    parse_document(&raw)
}

fn parse_document<T: DeserializeOwned>(raw: &str) -> ProvisionResult<T> {
    serde_json::from_str(raw).map_err(|e| ProvisionError::Manifest(e.to_string()))
}

impl ModrinthIndex {
    pub fn read(path: &Path) -> ProvisionResult<Self> {
        read_document(path)
    }

    pub fn parse(raw: &str) -> ProvisionResult<Self> {
        parse_document(raw)
    }

    /// `"<name> <versionId>"`, as reported after mods are materialized.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name, self.version_id)
    }
}

impl PackDependencies {
    pub fn read(path: &Path) -> ProvisionResult<Self> {
        read_document(path)
    }

    pub fn parse(raw: &str) -> ProvisionResult<Self> {
        parse_document(raw)
    }
}

impl ModFile {
    pub fn server_requirement(&self) -> ProvisionResult<EnvRequirement> {
        self.env
            .as_ref()
            .map(|env| env.server)
            .ok_or_else(|| ProvisionError::MissingKey(format!("env.server of {}", self.path)))
    }

    pub fn primary_download(&self) -> ProvisionResult<&str> {
        self.downloads
            .first()
            .map(String::as_str)
            .ok_or_else(|| ProvisionError::MissingKey(format!("downloads[0] of {}", self.path)))
    }
}
