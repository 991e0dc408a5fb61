//! Point — one simulated I/O endpoint (switch, relay, sensor, …).
//!
//! A point is identified by its configured `name`, carries an informational
//! `gear` tag, a [`PointState`], and an optional pulse deadline after which
//! it falls back to rest.

mod state;

pub use state::{ALERT_LABEL, ActiveLabel, CLEARED_LABEL, PointState, REST_LABEL};

use crate::time::Timestamp;

/// A simulated point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Point {
    pub name: String,
    pub gear: Option<String>,
    pub state: PointState,
    /// `None` means latched.
    pub deadline: Option<Timestamp>,
}

impl Point {
    /// A point at rest, untimed.
    #[must_use]
    pub fn new(name: impl Into<String>, gear: Option<String>) -> Self {
        Self {
            name: name.into(),
            gear,
            state: PointState::Rest,
            deadline: None,
        }
    }

    /// Replace state and deadline together.
    pub fn set(&mut self, state: PointState, deadline: Option<Timestamp>) {
        self.state = state;
        self.deadline = deadline;
    }

    /// Whether a pulse deadline has been reached at `now`.
    #[must_use]
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.deadline.is_some_and(|deadline| deadline <= now)
    }

    /// Back to rest, untimed.
    pub fn reset(&mut self) {
        self.set(PointState::Rest, None);
    }
}
