//! In-memory configuration store.

use std::sync::Mutex;

use simio_domain::error::SimioError;

use crate::ports::ConfigStore;

/// Keeps the points document in memory only. Useful for tests and for
/// running without a configuration file.
#[derive(Debug, Default)]
pub struct InMemoryConfigStore {
    document: Mutex<Option<String>>,
}

impl InMemoryConfigStore {
    /// Start with `document` already stored.
    #[must_use]
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(document.into())),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        self.document
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn location(&self) -> String {
        "memory".to_string()
    }

    async fn load(&self) -> Result<Option<String>, SimioError> {
        Ok(self.lock().clone())
    }

    async fn save(&self, document: &str) -> Result<(), SimioError> {
        *self.lock() = Some(document.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_load_nothing_when_empty() {
        let store = InMemoryConfigStore::default();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn should_load_what_was_saved() {
        let store = InMemoryConfigStore::with_document("{}");
        store.save("{\"simio\":{}}").await.unwrap();
        assert_eq!(
            store.load().await.unwrap().as_deref(),
            Some("{\"simio\":{}}")
        );
    }
}
