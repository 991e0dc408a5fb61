//! JSON wire shape of status snapshots.
//!
//! ```json
//! { "host": "h", "timestamp": 1700000000, "latest": 7,
//!   "control": { "status": { "lamp1": { "state": "on", "pulse": 1700000005 } } } }
//! ```
//!
//! Points are keyed by name and serialised in configuration order, which is
//! why the map is written by hand rather than collected into a `HashMap`.

use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

use simio_domain::status::{PointStatus, Status};
use simio_domain::time;

/// Serialisable view of a [`Status`].
pub struct WireStatus<'a>(pub &'a Status);

struct Control<'a>(&'a [PointStatus]);

struct Points<'a>(&'a [PointStatus]);

struct WirePoint<'a>(&'a PointStatus);

impl Serialize for WireStatus<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let status = self.0;
        let mut out = serializer.serialize_struct("Status", 4)?;
        out.serialize_field("host", &status.host)?;
        out.serialize_field("timestamp", &time::epoch_secs(status.timestamp))?;
        out.serialize_field("latest", &status.generation)?;
        out.serialize_field("control", &Control(&status.points))?;
        out.end()
    }
}

impl Serialize for Control<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("Control", 1)?;
        out.serialize_field("status", &Points(self.0))?;
        out.end()
    }
}

impl Serialize for Points<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for point in self.0 {
            map.serialize_entry(&point.name, &WirePoint(point))?;
        }
        map.end()
    }
}

impl Serialize for WirePoint<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let point = self.0;
        let mut out = serializer.serialize_map(None)?;
        out.serialize_entry("state", &point.state)?;
        if let Some(deadline) = point.pulse {
            out.serialize_entry("pulse", &time::epoch_secs(deadline))?;
        }
        if let Some(gear) = &point.gear {
            out.serialize_entry("gear", gear)?;
        }
        out.end()
    }
}
