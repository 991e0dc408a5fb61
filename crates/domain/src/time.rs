//! Time and timestamp helpers.

use chrono::{DateTime, TimeDelta, Utc};

/// UTC timestamp used for pulse deadlines and snapshot times.
pub type Timestamp = DateTime<Utc>;

/// Return the current UTC time.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now()
}

/// Build a timestamp from whole seconds since the Unix epoch.
///
/// Out-of-range values clamp to the epoch.
#[must_use]
pub fn from_epoch_secs(secs: i64) -> Timestamp {
    DateTime::from_timestamp(secs, 0).unwrap_or_default()
}

/// Whole seconds since the Unix epoch, as reported on the wire.
#[must_use]
pub fn epoch_secs(ts: Timestamp) -> i64 {
    ts.timestamp()
}

/// Offset `ts` by a number of seconds.
#[must_use]
pub fn add_secs(ts: Timestamp, secs: u32) -> Timestamp {
    ts + TimeDelta::seconds(i64::from(secs))
}
