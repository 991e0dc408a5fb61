//! Points configuration document.
//!
//! The document is JSON with the points list under `.simio.points`:
//!
//! ```json
//! { "simio": { "points": [ { "name": "lamp1", "gear": "light" } ] } }
//! ```
//!
//! Parsing is strict: anything that would make the registry ambiguous is
//! rejected before a registry is ever built from it.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::ConfigError;

/// One entry of the points array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointDescriptor {
    pub name: String,
    pub gear: Option<String>,
}

/// A validated points configuration, in document order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PointsDocument {
    pub points: Vec<PointDescriptor>,
}

impl PointsDocument {
    /// Parse and validate a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Syntax`] for invalid JSON,
    /// [`ConfigError::NoPointsArray`] when `.simio.points` is missing or not
    /// an array, [`ConfigError::InvalidPoint`] for an unusable entry and
    /// [`ConfigError::DuplicatePoint`] when a name repeats.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        let root: Value = serde_json::from_str(text)?;
        Self::from_value(&root)
    }

    /// Validate an already-decoded document.
    ///
    /// # Errors
    ///
    /// Same as [`PointsDocument::parse`], minus the syntax case.
    pub fn from_value(root: &Value) -> Result<Self, ConfigError> {
        let entries = root
            .pointer("/simio/points")
            .and_then(Value::as_array)
            .ok_or(ConfigError::NoPointsArray)?;

        let mut seen = HashSet::with_capacity(entries.len());
        let mut points = Vec::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            let descriptor = parse_descriptor(index, entry)?;
            if !seen.insert(descriptor.name.clone()) {
                return Err(ConfigError::DuplicatePoint {
                    name: descriptor.name,
                });
            }
            points.push(descriptor);
        }
        Ok(Self { points })
    }

    /// Serialize back to the canonical document shape.
    #[must_use]
    pub fn to_value(&self) -> Value {
        let points: Vec<Value> = self
            .points
            .iter()
            .map(|point| {
                let mut entry = serde_json::Map::new();
                entry.insert("name".to_string(), Value::from(point.name.as_str()));
                if let Some(gear) = &point.gear {
                    entry.insert("gear".to_string(), Value::from(gear.as_str()));
                }
                Value::Object(entry)
            })
            .collect();
        serde_json::json!({ "simio": { "points": points } })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn parse_descriptor(index: usize, entry: &Value) -> Result<PointDescriptor, ConfigError> {
    let invalid = |reason| ConfigError::InvalidPoint { index, reason };

    let object = entry.as_object().ok_or_else(|| invalid("not an object"))?;
    let name = match object.get("name") {
        Some(Value::String(name)) if !name.is_empty() => name.clone(),
        Some(Value::String(_)) => return Err(invalid("empty name")),
        Some(_) => return Err(invalid("name is not a string")),
        None => return Err(invalid("missing name")),
    };
    let gear = match object.get("gear") {
        None | Some(Value::Null) => None,
        Some(Value::String(gear)) if gear.is_empty() => None,
        Some(Value::String(gear)) => Some(gear.clone()),
        Some(_) => return Err(invalid("gear is not a string")),
    };
    Ok(PointDescriptor { name, gear })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_points_in_document_order() {
        let doc = PointsDocument::parse(
            r#"{"simio":{"points":[{"name":"b","gear":"light"},{"name":"a"}]}}"#,
        )
        .unwrap();

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.points[0].name, "b");
        assert_eq!(doc.points[0].gear.as_deref(), Some("light"));
        assert_eq!(doc.points[1].name, "a");
        assert_eq!(doc.points[1].gear, None);
    }

    #[test]
    fn should_accept_empty_points_array() {
        let doc = PointsDocument::parse(r#"{"simio":{"points":[]}}"#).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn should_treat_empty_gear_as_absent() {
        let doc = PointsDocument::parse(r#"{"simio":{"points":[{"name":"a","gear":""}]}}"#)
            .unwrap();
        assert_eq!(doc.points[0].gear, None);
    }

    #[test]
    fn should_reject_invalid_json() {
        let result = PointsDocument::parse("{not json");
        assert!(matches!(result, Err(ConfigError::Syntax(_))));
    }

    #[test]
    fn should_reject_missing_points_array() {
        let result = PointsDocument::parse(r#"{"simio":{}}"#);
        assert!(matches!(result, Err(ConfigError::NoPointsArray)));

        let result = PointsDocument::parse(r#"{"other":{"points":[]}}"#);
        assert!(matches!(result, Err(ConfigError::NoPointsArray)));
    }

    #[test]
    fn should_reject_points_that_are_not_an_array() {
        let result = PointsDocument::parse(r#"{"simio":{"points":{"name":"a"}}}"#);
        assert!(matches!(result, Err(ConfigError::NoPointsArray)));
    }

    #[test]
    fn should_reject_entry_without_name() {
        let result = PointsDocument::parse(r#"{"simio":{"points":[{"name":"a"},{"gear":"x"}]}}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPoint {
                index: 1,
                reason: "missing name"
            })
        ));
    }

    #[test]
    fn should_reject_non_object_entry() {
        let result = PointsDocument::parse(r#"{"simio":{"points":["a"]}}"#);
        assert!(matches!(
            result,
            Err(ConfigError::InvalidPoint { index: 0, .. })
        ));
    }

    #[test]
    fn should_reject_duplicate_names() {
        let result = PointsDocument::parse(r#"{"simio":{"points":[{"name":"a"},{"name":"a"}]}}"#);
        assert!(matches!(
            result,
            Err(ConfigError::DuplicatePoint { name }) if name == "a"
        ));
    }

    #[test]
    fn should_render_canonical_document() {
        let doc = PointsDocument::parse(
            r#"{"simio":{"points":[{"name":"a","gear":"light"},{"name":"b"}]},"extra":1}"#,
        )
        .unwrap();
        assert_eq!(
            doc.to_value(),
            serde_json::json!({"simio": {"points": [{"name": "a", "gear": "light"}, {"name": "b"}]}})
        );
    }
}
