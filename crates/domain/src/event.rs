//! Event — a structured `(category, subject, verb, detail)` record of
//! something that happened to a point or to the service.

use crate::command::Transition;
use crate::point::REST_LABEL;

/// Coarse grouping of event records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Point state changes and rejected commands.
    Simio,
    /// Configuration lifecycle.
    System,
    /// Service lifecycle.
    Service,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Simio => f.write_str("SIMIO"),
            Self::System => f.write_str("SYSTEM"),
            Self::Service => f.write_str("SERVICE"),
        }
    }
}

/// An event record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub category: Category,
    pub subject: String,
    pub verb: String,
    pub detail: String,
}

impl Event {
    #[must_use]
    pub fn new(
        category: Category,
        subject: impl Into<String>,
        verb: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        Self {
            category,
            subject: subject.into(),
            verb: verb.into(),
            detail: detail.into(),
        }
    }

    /// A point changed state because of a command.
    #[must_use]
    pub fn transition(transition: &Transition, cause: Option<&str>) -> Self {
        let comment = cause.map(|cause| format!(" ({cause})")).unwrap_or_default();
        let detail = match transition.pulse {
            Some(seconds) => format!("FOR {seconds} SECONDS{comment}"),
            None => format!("LATCHED{comment}"),
        };
        Self::new(
            Category::Simio,
            transition.point.as_str(),
            transition.label.as_str(),
            detail,
        )
    }

    /// A pulse ran out and the point fell back to rest.
    #[must_use]
    pub fn end_of_pulse(point: &str) -> Self {
        Self::new(
            Category::Simio,
            point,
            REST_LABEL.to_ascii_uppercase(),
            "END OF PULSE",
        )
    }

    #[must_use]
    pub fn invalid_pulse(point: &str, state: &str, value: &str) -> Self {
        Self::new(
            Category::Simio,
            point,
            state,
            format!("INVALID PULSE {value}"),
        )
    }

    #[must_use]
    pub fn invalid_point(point: &str, state: &str) -> Self {
        Self::new(Category::Simio, point, state, "INVALID POINT")
    }

    #[must_use]
    pub fn invalid_state(point: &str) -> Self {
        Self::new(Category::Simio, point, "", "INVALID STATE")
    }

    /// Configuration picked up from an external source.
    #[must_use]
    pub fn config_loaded(source: &str) -> Self {
        Self::new(Category::System, "CONFIG", "LOAD", format!("FROM {source}"))
    }

    /// Configuration accepted and persisted.
    #[must_use]
    pub fn config_saved(destination: &str) -> Self {
        Self::new(
            Category::System,
            "CONFIG",
            "SAVE",
            format!("TO {destination}"),
        )
    }

    #[must_use]
    pub fn started(host: &str) -> Self {
        Self::new(Category::Service, "simio", "STARTED", format!("ON {host}"))
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.category, self.subject, self.verb, self.detail
        )
    }
}
