//! # simio-domain
//!
//! Pure domain model for the simio simulated I/O endpoint.
//!
//! ## Responsibilities
//! - Foundational types: error conventions, timestamps
//! - Define **Points** (named simulated switches, relays, sensors) and their state
//! - Define the **Registry** that owns every point, applies commands, expires
//!   pulses and reconciles live state across configuration reloads
//! - Define **Commands** (validated state-change requests)
//! - Define the **points configuration document**
//! - Define **Status** snapshots and **Events** (structured log records)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod time;

pub mod command;
pub mod config;
pub mod event;
pub mod point;
pub mod registry;
pub mod status;
