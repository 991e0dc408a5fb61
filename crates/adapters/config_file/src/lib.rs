//! # simio-adapter-config-file
//!
//! File-backed [`ConfigStore`](simio_app::ports::ConfigStore).
//!
//! ## Responsibilities
//! - Read and persist the points configuration document as a JSON file
//! - Watch that file so edits made outside the service are picked up without
//!   a restart
//!
//! ## Dependency rule
//! Depends on `simio-app` for the port trait and `simio-domain` for error
//! types. File-system and `notify` types stay inside this crate.

mod error;
mod store;
mod watcher;

pub use error::FileStoreError;
pub use store::FileConfigStore;
pub use watcher::watch_config_file;
