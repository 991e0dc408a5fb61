//! Errors of the file-backed config store.

use std::path::PathBuf;

use simio_domain::error::SimioError;

/// File-system failures of the config store.
#[derive(Debug, thiserror::Error)]
pub enum FileStoreError {
    #[error("unable to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unable to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<FileStoreError> for SimioError {
    fn from(err: FileStoreError) -> Self {
        SimioError::storage(err)
    }
}
