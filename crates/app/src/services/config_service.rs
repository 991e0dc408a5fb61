//! Config service — use-cases around the points configuration document.
//!
//! A document is always validated before anything else happens: a document
//! that does not parse is never persisted and never reaches the registry.

use std::sync::Arc;

use tokio::sync::Mutex;

use simio_domain::config::PointsDocument;
use simio_domain::error::SimioError;
use simio_domain::event::Event;

use crate::ports::{Clock, ConfigStore, EventLog};
use crate::services::point_service::PointService;

/// Application service for loading, updating and reading back the points
/// configuration.
pub struct ConfigService<S, C, L> {
    store: S,
    points: Arc<PointService<C, L>>,
    /// Last accepted document text. The lock also serialises updates so an
    /// external refresh never interleaves with a save.
    current: Mutex<Option<String>>,
}

impl<S, C, L> ConfigService<S, C, L>
where
    S: ConfigStore + Send + Sync,
    C: Clock + Send + Sync,
    L: EventLog + Send + Sync,
{
    /// Create a new service backed by the given store, reconciling into
    /// `points`.
    pub fn new(store: S, points: Arc<PointService<C, L>>) -> Self {
        Self {
            store,
            points,
            current: Mutex::new(None),
        }
    }

    /// The point service this configuration feeds.
    pub fn points(&self) -> &Arc<PointService<C, L>> {
        &self.points
    }

    /// Load the stored document at startup.
    ///
    /// Returns the number of configured points; a store with no document
    /// leaves the registry empty.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be read, or
    /// [`SimioError::ConfigMalformed`] if the stored document is invalid. The
    /// registry is left empty in both cases.
    #[tracing::instrument(skip(self))]
    pub async fn load_initial(&self) -> Result<usize, SimioError> {
        let mut current = self.current.lock().await;
        let Some(text) = self.store.load().await? else {
            tracing::info!(location = %self.store.location(), "no points configuration found");
            return Ok(0);
        };
        let count = self.points.reload_config(&text)?;
        *current = Some(text);
        self.points
            .log()
            .record(Event::config_loaded(&self.store.location()));
        Ok(count)
    }

    /// Validate, persist, then apply a new document.
    ///
    /// # Errors
    ///
    /// Returns [`SimioError::ConfigMalformed`] if the document is invalid, or
    /// a storage error if it cannot be persisted. Neither case touches the
    /// registry.
    #[tracing::instrument(skip_all, fields(len = text.len()))]
    pub async fn update(&self, text: String) -> Result<usize, SimioError> {
        let mut current = self.current.lock().await;
        let document = PointsDocument::parse(&text)?;
        self.store.save(&text).await?;
        let count = self.points.reload_document(&document);
        *current = Some(text);
        self.points
            .log()
            .record(Event::config_saved(&self.store.location()));
        Ok(count)
    }

    /// Re-read the store after an external change.
    ///
    /// Returns `None` when the stored document is the one already applied.
    ///
    /// # Errors
    ///
    /// Returns a storage error or [`SimioError::ConfigMalformed`]; the
    /// registry keeps its current contents.
    #[tracing::instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Option<usize>, SimioError> {
        let mut current = self.current.lock().await;
        let Some(text) = self.store.load().await? else {
            return Ok(None);
        };
        if current.as_deref() == Some(text.as_str()) {
            return Ok(None);
        }
        let count = self.points.reload_config(&text)?;
        *current = Some(text);
        self.points
            .log()
            .record(Event::config_loaded(&self.store.location()));
        Ok(Some(count))
    }

    /// The last accepted document, or an empty points document when none
    /// was ever accepted.
    pub async fn current(&self) -> String {
        match self.current.lock().await.as_ref() {
            Some(text) => text.clone(),
            None => PointsDocument::default().to_value().to_string(),
        }
    }
}
