use std::path::Path;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::core::error::{ProvisionError, ProvisionResult};
use crate::core::http::build_http_client;

/// HTTP GET capability. Returns the full response body or fails on any
/// non-success status.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn get(&self, url: &str) -> ProvisionResult<Vec<u8>>;
}

/// Sequential `reqwest` downloader. No retries, no integrity checks.
pub struct Downloader {
    client: Client,
}

impl Downloader {
    pub fn new() -> ProvisionResult<Self> {
        Ok(Self {
            client: build_http_client()?,
        })
    }
}

#[async_trait]
impl Fetch for Downloader {
    async fn get(&self, url: &str) -> ProvisionResult<Vec<u8>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProvisionError::DownloadFailed {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }
}

/// Fetch a JSON document and decode it.
pub async fn fetch_json<T: DeserializeOwned>(fetcher: &dyn Fetch, url: &str) -> ProvisionResult<T> {
    let bytes = fetcher.get(url).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Download a single file to `dest`, creating parent directories as needed.
///
/// The handle is dropped right after the write so installers invoked next
/// can open the file.
pub async fn download_file(fetcher: &dyn Fetch, url: &str, dest: &Path) -> ProvisionResult<u64> {
    if let Some(parent) = dest.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|e| ProvisionError::io(parent, e))?;
    }

    let bytes = fetcher.get(url).await?;

    {
        let mut file = tokio::fs::File::create(dest)
            .await
            .map_err(|e| ProvisionError::io(dest, e))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| ProvisionError::io(dest, e))?;
        file.flush().await.map_err(|e| ProvisionError::io(dest, e))?;
    }

    debug!("Downloaded: {} -> {:?}", url, dest);
    Ok(bytes.len() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::MemoryFetcher;

    #[tokio::test]
    async fn download_file_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MemoryFetcher::new().with("https://cdn.test/a.jar", b"jar-bytes".to_vec());
        let dest = dir.path().join("nested/deeper/a.jar");

        let written = download_file(&fetcher, "https://cdn.test/a.jar", &dest)
            .await
            .unwrap();

        assert_eq!(written, 9);
        assert_eq!(std::fs::read(&dest).unwrap(), b"jar-bytes");
    }

    #[tokio::test]
    async fn download_file_propagates_fetch_failure_without_writing() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = MemoryFetcher::new();
        let dest = dir.path().join("missing.jar");

        let err = download_file(&fetcher, "https://cdn.test/missing.jar", &dest)
            .await
            .unwrap_err();

        assert!(matches!(err, ProvisionError::DownloadFailed { status: 404, .. }));
        assert!(!dest.exists());
    }

    #[tokio::test]
    async fn fetch_json_decodes_documents() {
        #[derive(serde::Deserialize)]
        struct Doc {
            id: String,
        }

        let fetcher =
            MemoryFetcher::new().with("https://meta.test/doc.json", br#"{"id":"1.20.1"}"#.to_vec());
        let doc: Doc = fetch_json(&fetcher, "https://meta.test/doc.json").await.unwrap();
        assert_eq!(doc.id, "1.20.1");
    }
}
