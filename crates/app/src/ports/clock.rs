//! Clock port — where "now" comes from.

use std::sync::Arc;

use simio_domain::time::{self, Timestamp};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> Timestamp;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        time::now()
    }
}

impl<T: Clock + Send + Sync> Clock for Arc<T> {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}
