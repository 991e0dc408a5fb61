//! Registry — the authoritative table of points.
//!
//! Points are kept in configuration order with a name index on the side.
//! Commands and pulse expiry mutate points in place; reconfiguration builds a
//! whole new registry and carries live state over by name.
//!
//! Every mutating operation bumps [`Registry::generation`], which status
//! consumers use to skip snapshots they have already seen. The counter
//! survives reconciliation and never goes backwards.

use std::collections::HashMap;

use crate::command::{Command, Target, Transition};
use crate::config::PointsDocument;
use crate::error::UnknownPointError;
use crate::point::{Point, PointState};
use crate::status::{PointStatus, Status, StatusView};
use crate::time::{Timestamp, add_secs};

/// The table of simulated points.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    points: Vec<Point>,
    index: HashMap<String, usize>,
    generation: u64,
}

impl Registry {
    /// Build a registry with every configured point at rest.
    #[must_use]
    pub fn from_document(document: &PointsDocument) -> Self {
        let points: Vec<Point> = document
            .points
            .iter()
            .map(|descriptor| Point::new(descriptor.name.as_str(), descriptor.gear.clone()))
            .collect();
        let index = points
            .iter()
            .enumerate()
            .map(|(position, point)| (point.name.clone(), position))
            .collect();
        Self {
            points,
            index,
            generation: 0,
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Point> {
        self.index
            .get(name)
            .and_then(|&position| self.points.get(position))
    }

    /// Points in configuration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Replace this registry's membership with `document`.
    ///
    /// Points whose name is still configured keep their state and deadline;
    /// points no longer configured are dropped along with their state; newly
    /// configured points start at rest. The result is one generation ahead.
    #[must_use]
    pub fn reconcile(self, document: &PointsDocument) -> Self {
        let mut carried: HashMap<String, (PointState, Option<Timestamp>)> = self
            .points
            .into_iter()
            .map(|point| (point.name, (point.state, point.deadline)))
            .collect();

        let mut next = Self::from_document(document);
        for point in &mut next.points {
            if let Some((state, deadline)) = carried.remove(&point.name) {
                point.set(state, deadline);
            }
        }
        next.generation = self.generation + 1;
        next
    }

    /// Apply a validated command at time `now`.
    ///
    /// On success the generation advances once, even when a `clear` left
    /// every point untouched.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownPointError`] when a named target is not configured;
    /// the registry is unchanged in that case.
    pub fn apply(
        &mut self,
        command: &Command,
        now: Timestamp,
    ) -> Result<Vec<Transition>, UnknownPointError> {
        let deadline = command.pulse.map(|seconds| add_secs(now, seconds));
        let mut transitions = Vec::new();

        match &command.target {
            Target::All => {
                for point in &mut self.points {
                    if let Some(transition) = apply_to(point, command, deadline) {
                        transitions.push(transition);
                    }
                }
            }
            Target::Point(name) => {
                let point = self
                    .index
                    .get(name)
                    .and_then(|&position| self.points.get_mut(position))
                    .ok_or_else(|| UnknownPointError { name: name.clone() })?;
                if let Some(transition) = apply_to(point, command, deadline) {
                    transitions.push(transition);
                }
            }
        }

        self.generation += 1;
        Ok(transitions)
    }

    /// Revert every point whose pulse deadline is at or before `now`.
    ///
    /// Returns the names of the reverted points. The generation advances
    /// only when something reverted.
    pub fn sweep(&mut self, now: Timestamp) -> Vec<String> {
        let mut expired = Vec::new();
        for point in &mut self.points {
            if point.is_expired(now) {
                point.reset();
                expired.push(point.name.clone());
            }
        }
        if !expired.is_empty() {
            self.generation += 1;
        }
        expired
    }

    /// Full snapshot of the registry.
    #[must_use]
    pub fn status(&self, host: &str, now: Timestamp) -> Status {
        Status {
            host: host.to_string(),
            timestamp: now,
            generation: self.generation,
            points: self
                .points
                .iter()
                .map(|point| PointStatus {
                    name: point.name.clone(),
                    state: point.state.label().to_string(),
                    pulse: point.deadline,
                    gear: point.gear.clone().filter(|gear| !gear.is_empty()),
                })
                .collect(),
        }
    }

    /// Snapshot unless the caller already saw the current generation.
    #[must_use]
    pub fn view(&self, known: Option<u64>, host: &str, now: Timestamp) -> StatusView {
        if known == Some(self.generation) {
            StatusView::Unchanged
        } else {
            StatusView::Snapshot(self.status(host, now))
        }
    }
}

fn apply_to(
    point: &mut Point,
    command: &Command,
    deadline: Option<Timestamp>,
) -> Option<Transition> {
    let state = command.action.resolve(&point.state)?;
    point.set(state, deadline);
    Some(Transition {
        point: point.name.clone(),
        label: command.label.clone(),
        pulse: command.pulse,
    })
}
