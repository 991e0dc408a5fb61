//! Event log port — sink for structured event records.

use std::sync::Arc;

use simio_domain::event::Event;

/// Records events describing point and service activity.
///
/// Recording never fails from the caller's point of view: a sink that cannot
/// keep an event drops it.
pub trait EventLog {
    fn record(&self, event: Event);
}

impl<T: EventLog + Send + Sync> EventLog for Arc<T> {
    fn record(&self, event: Event) {
        (**self).record(event);
    }
}
