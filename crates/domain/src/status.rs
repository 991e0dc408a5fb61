//! Status snapshots of the registry.

use crate::time::Timestamp;

/// Reported view of one point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointStatus {
    pub name: String,
    /// Effective label, `"off"` at rest.
    pub state: String,
    /// Pulse deadline, when the state is temporary.
    pub pulse: Option<Timestamp>,
    /// Only present when non-empty.
    pub gear: Option<String>,
}

/// Immutable point-in-time snapshot of every point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub host: String,
    pub timestamp: Timestamp,
    /// Registry generation the snapshot was taken at.
    pub generation: u64,
    /// In configuration order.
    pub points: Vec<PointStatus>,
}

impl Status {
    #[must_use]
    pub fn point(&self, name: &str) -> Option<&PointStatus> {
        self.points.iter().find(|point| point.name == name)
    }
}

/// Result of a status query with change detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusView {
    /// The caller's last known generation is still current.
    Unchanged,
    Snapshot(Status),
}

impl StatusView {
    #[must_use]
    pub fn into_snapshot(self) -> Option<Status> {
        match self {
            Self::Unchanged => None,
            Self::Snapshot(status) => Some(status),
        }
    }
}
