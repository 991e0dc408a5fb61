//! # simio-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **simio JSON API** under `/simio`:
//!   - `GET /simio/status?known=<generation>` — snapshot, `204` when unchanged
//!   - `GET|POST /simio/set?point=&state=&pulse=&cause=` — command a point
//!   - `GET|POST /simio/config` — read back / replace the points configuration
//!   - `GET /simio/stream` — server-sent snapshots on every change
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//! - Allow cross-origin `GET` so dashboards on other hosts can poll status
//!
//! ## Dependency rule
//! Depends on `simio-app` (for port traits and services) and `simio-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
pub mod wire;

#[cfg(test)]
pub(crate) mod test_support;
