//! Point service — the registry of record and the four core operations.
//!
//! The registry sits behind a single [`RwLock`]. Every command, sweep and
//! configuration swap holds the write lock for its whole duration, so a
//! reader never sees a point half-updated. The new generation is published
//! while the lock is still held, so subscribers never see it go backwards.
//! Event records are handed to the [`EventLog`] only after the lock is
//! released.

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tokio::sync::watch;

use simio_domain::command::CommandRequest;
use simio_domain::config::PointsDocument;
use simio_domain::error::{InvalidValueError, MissingField, SimioError};
use simio_domain::event::Event;
use simio_domain::registry::Registry;
use simio_domain::status::{Status, StatusView};
use simio_domain::time::Timestamp;

use crate::ports::{Clock, EventLog};

/// Application service owning the live point registry.
pub struct PointService<C, L> {
    registry: RwLock<Registry>,
    host: String,
    clock: C,
    log: L,
    generation: watch::Sender<u64>,
}

impl<C: Clock, L: EventLog> PointService<C, L> {
    /// Create a service with an empty registry.
    pub fn new(host: impl Into<String>, clock: C, log: L) -> Self {
        let (generation, _) = watch::channel(0);
        Self {
            registry: RwLock::new(Registry::default()),
            host: host.into(),
            clock,
            log,
            generation,
        }
    }

    /// The event log this service records into.
    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Current registry generation.
    pub fn generation(&self) -> u64 {
        self.read().generation()
    }

    /// Watch the registry generation; the value changes after every
    /// successful mutation.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.generation.subscribe()
    }

    /// Full snapshot, regardless of what the caller saw before.
    pub fn snapshot(&self) -> Status {
        self.read().status(&self.host, self.clock.now())
    }

    /// Snapshot, or [`StatusView::Unchanged`] when `known` is still the
    /// current generation.
    pub fn get_status(&self, known: Option<u64>) -> StatusView {
        self.read().view(known, &self.host, self.clock.now())
    }

    /// Validate and apply a command, returning the post-command snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`SimioError::MissingField`] or [`SimioError::InvalidValue`]
    /// when the request does not validate, and [`SimioError::UnknownPoint`]
    /// when it names a point that is not configured. The registry is not
    /// modified in any of these cases.
    #[tracing::instrument(
        skip(self, request),
        fields(point = ?request.point, state = ?request.state)
    )]
    pub fn apply_command(&self, request: &CommandRequest) -> Result<Status, SimioError> {
        let point = request.point.as_deref().unwrap_or_default();
        let label = request.state.as_deref().unwrap_or_default();

        let command = request.validate().inspect_err(|err| match err {
            SimioError::InvalidValue(InvalidValueError::Pulse { value }) => {
                self.log.record(Event::invalid_pulse(point, label, value));
            }
            SimioError::MissingField(MissingField::State) => {
                self.log.record(Event::invalid_state(point));
            }
            _ => {}
        })?;

        let now = self.clock.now();
        let applied = {
            let mut registry = self.write();
            registry.apply(&command, now).map(|transitions| {
                let status = registry.status(&self.host, now);
                self.publish(status.generation);
                (transitions, status)
            })
        };
        let (transitions, status) = applied.inspect_err(|_| {
            self.log.record(Event::invalid_point(point, label));
        })?;

        for transition in &transitions {
            self.log
                .record(Event::transition(transition, command.cause.as_deref()));
        }
        Ok(status)
    }

    /// Parse `text` and reconcile the registry against it.
    ///
    /// Returns the number of configured points.
    ///
    /// # Errors
    ///
    /// Returns [`SimioError::ConfigMalformed`] when the document does not
    /// parse; the current registry is left untouched.
    pub fn reload_config(&self, text: &str) -> Result<usize, SimioError> {
        let document = PointsDocument::parse(text)?;
        Ok(self.reload_document(&document))
    }

    /// Reconcile the registry against an already validated document.
    ///
    /// Returns the number of configured points.
    #[tracing::instrument(skip_all, fields(points = document.len()))]
    pub fn reload_document(&self, document: &PointsDocument) -> usize {
        if document.is_empty() {
            tracing::warn!("points configuration declares no points");
        }
        let generation = {
            let mut registry = self.write();
            let previous = std::mem::take(&mut *registry);
            *registry = previous.reconcile(document);
            self.publish(registry.generation());
            registry.generation()
        };
        tracing::debug!(generation, "registry reconciled");
        document.len()
    }

    /// Revert every pulse whose deadline is at or before `now`.
    ///
    /// Returns how many points reverted.
    pub fn sweep(&self, now: Timestamp) -> usize {
        let expired = {
            let mut registry = self.write();
            let expired = registry.sweep(now);
            if !expired.is_empty() {
                self.publish(registry.generation());
            }
            expired
        };
        for name in &expired {
            self.log.record(Event::end_of_pulse(name));
        }
        expired.len()
    }

    /// [`sweep`](Self::sweep) at the clock's current time.
    pub fn tick(&self) -> usize {
        self.sweep(self.clock.now())
    }

    fn publish(&self, generation: u64) {
        self.generation.send_replace(generation);
    }

    fn read(&self) -> RwLockReadGuard<'_, Registry> {
        self.registry.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Registry> {
        self.registry.write().unwrap_or_else(PoisonError::into_inner)
    }
}
