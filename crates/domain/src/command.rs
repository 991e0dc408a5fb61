//! Commands — validated requests to change the state of one or all points.
//!
//! A [`CommandRequest`] carries the raw, optional fields as they arrive from
//! a caller. [`CommandRequest::validate`] turns it into a [`Command`] or
//! rejects it before anything is touched.

use serde::Deserialize;

use crate::error::{InvalidValueError, MissingField, SimioError};
use crate::point::{CLEARED_LABEL, PointState};

/// Point name addressing every point at once.
pub const WILDCARD: &str = "all";

/// Requested label meaning "alert → on, otherwise leave alone".
pub const CLEAR_LABEL: &str = "clear";

/// Raw command fields, all optional until validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CommandRequest {
    pub point: Option<String>,
    pub state: Option<String>,
    pub pulse: Option<String>,
    pub cause: Option<String>,
}

impl CommandRequest {
    #[must_use]
    pub fn new(point: impl Into<String>, state: impl Into<String>) -> Self {
        Self {
            point: Some(point.into()),
            state: Some(state.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_pulse(mut self, seconds: i64) -> Self {
        self.pulse = Some(seconds.to_string());
        self
    }

    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Check every field and build a [`Command`].
    ///
    /// # Errors
    ///
    /// Returns [`SimioError::MissingField`] when the point name or state is
    /// absent or empty, and [`SimioError::InvalidValue`] when the pulse is
    /// not a whole number of seconds in `0..=u32::MAX`.
    pub fn validate(&self) -> Result<Command, SimioError> {
        let point = non_empty(self.point.as_deref()).ok_or(MissingField::PointName)?;
        let label = non_empty(self.state.as_deref()).ok_or(MissingField::State)?;
        let pulse = match self.pulse.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => parse_pulse(raw)?,
        };

        let target = if point == WILDCARD {
            Target::All
        } else {
            Target::Point(point.to_string())
        };

        Ok(Command {
            target,
            action: Action::from_label(label),
            label: label.to_string(),
            pulse,
            cause: non_empty(self.cause.as_deref()).map(str::to_string),
        })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn parse_pulse(raw: &str) -> Result<Option<u32>, InvalidValueError> {
    let invalid = || InvalidValueError::Pulse {
        value: raw.to_string(),
    };
    let seconds: i64 = raw.parse().map_err(|_| invalid())?;
    if seconds < 0 {
        return Err(invalid());
    }
    let seconds = u32::try_from(seconds).map_err(|_| invalid())?;
    Ok((seconds > 0).then_some(seconds))
}

/// Which points a command addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    All,
    Point(String),
}

/// What a command does to each addressed point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Store this state unconditionally.
    Set(PointState),
    /// Move `alert` to `on`; skip any point in another state.
    ClearAlert,
}

impl Action {
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.eq_ignore_ascii_case(CLEAR_LABEL) {
            Self::ClearAlert
        } else {
            Self::Set(PointState::from_label(label))
        }
    }

    /// State to store on `current`, or `None` when the point is skipped.
    #[must_use]
    pub fn resolve(&self, current: &PointState) -> Option<PointState> {
        match self {
            Self::Set(state) => Some(state.clone()),
            Self::ClearAlert if current.is_alert() => Some(PointState::from_label(CLEARED_LABEL)),
            Self::ClearAlert => None,
        }
    }
}

/// A validated command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub target: Target,
    pub action: Action,
    /// Label as requested, kept for event records.
    pub label: String,
    /// Pulse length in seconds; `None` means latched.
    pub pulse: Option<u32>,
    pub cause: Option<String>,
}

/// One point changed by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub point: String,
    pub label: String,
    pub pulse: Option<u32>,
}
