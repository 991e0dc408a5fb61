//! Config store port — where the points configuration document lives.

use std::future::Future;

use simio_domain::error::SimioError;

/// Reads and persists the raw points configuration document.
pub trait ConfigStore {
    /// Human-readable location, used in event records (e.g. a file path).
    fn location(&self) -> String;

    /// Read the current document, or `None` when there is none yet.
    fn load(&self) -> impl Future<Output = Result<Option<String>, SimioError>> + Send;

    /// Replace the stored document.
    fn save(&self, document: &str) -> impl Future<Output = Result<(), SimioError>> + Send;
}
