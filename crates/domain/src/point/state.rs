//! Point state — rest, or a named active label.

/// Label reported for a point at rest.
pub const REST_LABEL: &str = "off";
/// Label a point must carry for a `clear` command to take effect.
pub const ALERT_LABEL: &str = "alert";
/// Label a cleared alert moves to.
pub const CLEARED_LABEL: &str = "on";

/// Current state of a point.
///
/// Rest is the absence of a label: `"off"` is never stored as
/// [`Named`](Self::Named). An [`ActiveLabel`] can only be built through
/// [`PointState::from_label`], which keeps it that way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PointState {
    #[default]
    Rest,
    Named(ActiveLabel),
}

/// A non-empty label other than the rest label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLabel(String);

impl ActiveLabel {
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PointState {
    /// Map a free-form label onto a state. `"off"` (any case) and the empty
    /// label both mean rest.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() || label.eq_ignore_ascii_case(REST_LABEL) {
            Self::Rest
        } else {
            Self::Named(ActiveLabel(label.to_string()))
        }
    }

    #[must_use]
    pub fn is_rest(&self) -> bool {
        matches!(self, Self::Rest)
    }

    /// Whether the stored label is `alert`, ignoring case.
    #[must_use]
    pub fn is_alert(&self) -> bool {
        match self {
            Self::Named(label) => label.as_str().eq_ignore_ascii_case(ALERT_LABEL),
            Self::Rest => false,
        }
    }

    /// Effective label, with the rest label substituted.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Rest => REST_LABEL,
            Self::Named(label) => label.as_str(),
        }
    }
}

impl std::fmt::Display for PointState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_rest() {
        assert_eq!(PointState::default(), PointState::Rest);
    }

    #[test]
    fn should_map_off_to_rest_regardless_of_case() {
        assert_eq!(PointState::from_label("off"), PointState::Rest);
        assert_eq!(PointState::from_label("OFF"), PointState::Rest);
        assert_eq!(PointState::from_label("Off"), PointState::Rest);
    }

    #[test]
    fn should_map_empty_label_to_rest() {
        assert_eq!(PointState::from_label(""), PointState::Rest);
    }

    #[test]
    fn should_keep_custom_label_verbatim() {
        let state = PointState::from_label("Flashing");
        assert!(matches!(&state, PointState::Named(label) if label.as_str() == "Flashing"));
        assert_eq!(state.label(), "Flashing");
    }

    #[test]
    fn should_never_hold_rest_label_as_named() {
        for label in ["off", "OFF", ""] {
            assert!(!matches!(
                PointState::from_label(label),
                PointState::Named(_)
            ));
        }
    }

    #[test]
    fn should_detect_alert_ignoring_case() {
        assert!(PointState::from_label("ALERT").is_alert());
        assert!(!PointState::from_label("on").is_alert());
        assert!(!PointState::Rest.is_alert());
    }

    #[test]
    fn should_display_rest_as_off() {
        assert_eq!(PointState::Rest.to_string(), "off");
        assert_eq!(PointState::from_label("on").to_string(), "on");
    }
}
