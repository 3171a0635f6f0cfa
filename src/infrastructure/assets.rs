//! Read-only access to the static dataset assets

use crate::domain::config_types::AssetPath;
use crate::error::{Error, Result};
use crate::infrastructure::log_messages::loading;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

/// Anything that can hand out the bytes of a named asset
#[async_trait]
pub trait AssetSource: Send + Sync {
    async fn fetch(&self, asset: &AssetPath) -> Result<Vec<u8>>;
}

/// Assets below a directory on the local filesystem
#[derive(Debug, Clone)]
pub struct FileSystemSource {
    root: PathBuf,
}

impl FileSystemSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &PathBuf {
        &self.root
    }
}

#[async_trait]
impl AssetSource for FileSystemSource {
    async fn fetch(&self, asset: &AssetPath) -> Result<Vec<u8>> {
        let path = self.root.join(asset.as_ref());
        debug!(path = %path.display(), "{}", loading::READING_ASSET);
        let bytes = tokio::fs::read(&path).await?;
        debug!(path = %path.display(), bytes = bytes.len(), "{}", loading::ASSET_READ);
        Ok(bytes)
    }
}

/// In-memory assets, for tests and embedding
///
/// An asset marked as stalled never resolves, which makes in-flight cancellation
/// observable.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    assets: Arc<RwLock<HashMap<String, Vec<u8>>>>,
    stalled: Arc<RwLock<HashSet<String>>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, asset: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        self.assets.write().insert(asset.into(), bytes.into());
    }

    pub fn stall(&self, asset: impl Into<String>) {
        self.stalled.write().insert(asset.into());
    }
}

#[async_trait]
impl AssetSource for MemorySource {
    async fn fetch(&self, asset: &AssetPath) -> Result<Vec<u8>> {
        if self.stalled.read().contains(asset.as_ref()) {
            std::future::pending::<()>().await;
        }
        self.assets
            .read()
            .get(asset.as_ref())
            .cloned()
            .ok_or_else(|| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("asset not found: {asset}"),
                ))
            })
    }
}
