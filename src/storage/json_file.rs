use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};
use tracing::info;
use crate::actor_framework::{FrameworkError, LogBackend};

/// A log kept as one pretty-printed JSON array on disk.
///
/// Every load re-reads the file and every persist rewrites it in full.
#[derive(Debug)]
pub struct JsonFileBackend<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileBackend<T> {
    /// Opens the log at `path`, creating it as `[]` (parent directories
    /// included) when it does not exist yet.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, FrameworkError> {
        let path = path.into();

        if !tokio::fs::try_exists(&path).await? {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                tokio::fs::create_dir_all(parent).await?;
            }
            tokio::fs::write(&path, b"[]").await?;
            info!(path = %path.display(), "Created empty order log");
        }

        Ok(Self { path, _records: PhantomData })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl<T> LogBackend<T> for JsonFileBackend<T>
where
    T: Serialize + DeserializeOwned + Send + Sync + 'static,
{
    async fn load(&self) -> Result<Vec<T>, FrameworkError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            // Removed underneath us: same as a fresh log
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        Ok(serde_json::from_slice(&bytes)?)
    }

    async fn persist(&self, records: &[T]) -> Result<(), FrameworkError> {
        let bytes = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}
