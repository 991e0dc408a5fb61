//! # simio-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `Clock` — source of the current time
//!   - `EventLog` — sink for structured event records
//!   - `ConfigStore` — read & persist the points configuration document
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PointService` — owns the live registry: status, commands, reload, sweep
//!   - `ConfigService` — load, update and read back the configuration document
//! - Provide **in-process infrastructure** that doesn't need IO
//!   (tracing event log, in-memory config store, pulse sweeper task)
//!
//! ## Dependency rule
//! Depends on `simio-domain` only (plus `tokio` for sync primitives and timers).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod config_store;
pub mod event_log;
pub mod ports;
pub mod pulse_sweeper;
pub mod services;
