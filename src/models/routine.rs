//! Generated-routine payloads.
//!
//! The routine generator answers with one of three shapes:
//!
//! | Shape | Example |
//! |-------|---------|
//! | Flat array | `[{section}, {section}]` |
//! | Wrapped | `{"routine": [{section}], "feedback": "..."}` |
//! | Single section | `{section}` |
//!
//! plus `null` for "nothing". All of them flatten to `Vec<Section>`.

use serde::Deserialize;
use serde_json::Value;

use super::Section;
use crate::error::Result;

/// A routine payload in any of the accepted shapes.
///
/// Variant order matters: an object with a `routine` array is the
/// wrapped form before it is a (mostly empty) single section.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RoutinePayload {
    /// `{"routine": [...]}`
    Wrapped { routine: Vec<Section> },
    /// `[...]`
    Many(Vec<Section>),
    /// A lone section object.
    One(Box<Section>),
}

impl RoutinePayload {
    /// Flattens the payload into a section list.
    pub fn into_sections(self) -> Vec<Section> {
        match self {
            RoutinePayload::Wrapped { routine } => routine,
            RoutinePayload::Many(sections) => sections,
            RoutinePayload::One(section) => vec![*section],
        }
    }
}

/// Decodes a routine payload from JSON text.
///
/// `null` yields an empty list. Malformed JSON is an error.
pub fn sections_from_json(text: &str) -> Result<Vec<Section>> {
    let payload: Option<RoutinePayload> = serde_json::from_str(text)?;
    Ok(payload.map(RoutinePayload::into_sections).unwrap_or_default())
}

/// Decodes a routine payload from an already-parsed JSON value.
pub fn sections_from_value(value: Value) -> Result<Vec<Section>> {
    let payload: Option<RoutinePayload> = serde_json::from_value(value)?;
    Ok(payload.map(RoutinePayload::into_sections).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(code: &str) -> Value {
        json!({"courseCode": code, "sectionName": "01"})
    }

    #[test]
    fn test_flat_array() {
        let sections = sections_from_value(json!([section("CSE110"), section("MAT110")])).unwrap();
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[1].course_code, "MAT110");
    }

    #[test]
    fn test_wrapped_routine() {
        let sections = sections_from_value(json!({
            "routine": [section("CSE110")],
            "feedback": "Balanced days"
        }))
        .unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].course_code, "CSE110");
    }

    #[test]
    fn test_single_section() {
        let sections = sections_from_value(section("ENG101")).unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].course_code, "ENG101");
    }

    #[test]
    fn test_null_is_empty() {
        assert!(sections_from_value(Value::Null).unwrap().is_empty());
        assert!(sections_from_json("null").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_json() {
        assert!(sections_from_json("[{\"courseCode\": ").is_err());
    }
}
