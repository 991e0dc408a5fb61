//! Event log backed by `tracing`.

use simio_domain::event::Event;

use crate::ports::EventLog;

/// Emits every event record as an `INFO` tracing event with structured
/// `category`, `subject` and `verb` fields.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventLog;

impl EventLog for TracingEventLog {
    fn record(&self, event: Event) {
        tracing::info!(
            target: "simio::event",
            category = %event.category,
            subject = %event.subject,
            verb = %event.verb,
            "{}",
            event.detail
        );
    }
}
