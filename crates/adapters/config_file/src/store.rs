//! JSON file config store.

use std::io::ErrorKind;
use std::path::PathBuf;

use simio_app::ports::ConfigStore;
use simio_domain::error::SimioError;

use crate::error::FileStoreError;

/// Stores the points document in a single file.
///
/// Saves go through a sibling temporary file and a rename, so a reader never
/// observes a half-written document.
#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn write(&self, document: &str) -> Result<(), FileStoreError> {
        let write_err = |source| FileStoreError::Write {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
        }
        let staging = self.staging_path();
        tokio::fs::write(&staging, document)
            .await
            .map_err(write_err)?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .map_err(write_err)
    }
}

impl ConfigStore for FileConfigStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Option<String>, SimioError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(text)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(FileStoreError::Read {
                path: self.path.clone(),
                source,
            }
            .into()),
        }
    }

    #[tracing::instrument(skip_all, fields(path = %self.path.display(), len = document.len()))]
    async fn save(&self, document: &str) -> Result<(), SimioError> {
        self.write(document).await?;
        tracing::debug!("points configuration written");
        Ok(())
    }
}
