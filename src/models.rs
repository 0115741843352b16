//! Time-range models shared by the catalog and its consumers.
//!
//! `TimeRange` mirrors the shape dashboard pickers exchange: an internally
//! tagged union discriminated by a `type` field. The `lower` strings are
//! relative-time expressions owned by the downstream query engine; this crate
//! stores and publishes them verbatim and never evaluates them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A relative, rolling window anchored to "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectableDurationTimeRange {
    /// Total width of the window in seconds. Always > 0 for catalog entries.
    pub seconds: u64,
    /// Relative-time expression for the start boundary, e.g. `"now() - 1h"`.
    pub lower: String,
    /// Always `None` for this variant: the window is open-ended at "now".
    /// Serialized as an explicit `null`.
    pub upper: Option<String>,
    /// Display label, unique within the catalog.
    pub label: String,
    /// Short-form duration token matching `seconds`, e.g. `"1h"`.
    pub duration: String,
}

/// Marker for a user-specified absolute window.
///
/// The static template carries only the label; pickers fill in the absolute
/// bounds (formatted per [`crate::catalog::TIME_RANGE_FORMAT`]) once the user
/// has chosen them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomTimeRange {
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper: Option<String>,
}

/// Tagged union over the time-range variants, discriminated by `type`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TimeRange {
    /// A predefined rolling window from the catalog.
    #[serde(rename = "selectable-duration")]
    SelectableDuration(SelectableDurationTimeRange),
    /// A user-specified absolute window.
    #[serde(rename = "custom")]
    Custom(CustomTimeRange),
}

impl TimeRange {
    /// Display label of the underlying variant.
    pub fn label(&self) -> &str {
        match self {
            Self::SelectableDuration(range) => &range.label,
            Self::Custom(range) => &range.label,
        }
    }
}

impl From<SelectableDurationTimeRange> for TimeRange {
    fn from(range: SelectableDurationTimeRange) -> Self {
        Self::SelectableDuration(range)
    }
}

impl From<CustomTimeRange> for TimeRange {
    fn from(range: CustomTimeRange) -> Self {
        Self::Custom(range)
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for SelectableDurationTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

impl fmt::Display for CustomTimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn past_five_minutes() -> SelectableDurationTimeRange {
        SelectableDurationTimeRange {
            seconds: 300,
            lower: "now() - 5m".to_string(),
            upper: None,
            label: "Past 5m".to_string(),
            duration: "5m".to_string(),
        }
    }

    #[test]
    fn test_selectable_duration_tagged_serialization() {
        let range = TimeRange::from(past_five_minutes());
        let json = serde_json::to_value(&range).unwrap();
        assert_eq!(json["type"], "selectable-duration");
        assert_eq!(json["seconds"], 300);
        assert_eq!(json["lower"], "now() - 5m");
        // open-ended upper bound must appear as an explicit null
        assert!(json["upper"].is_null());
        assert!(json.as_object().unwrap().contains_key("upper"));
    }

    #[test]
    fn test_custom_tagged_serialization_omits_empty_bounds() {
        let range = TimeRange::Custom(CustomTimeRange {
            label: "Custom Time Range".to_string(),
            lower: None,
            upper: None,
        });
        let json = serde_json::to_value(&range).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 2);
        assert_eq!(json["type"], "custom");
        assert_eq!(json["label"], "Custom Time Range");
    }

    #[test]
    fn test_custom_with_bounds_round_trip() {
        let range = TimeRange::Custom(CustomTimeRange {
            label: "Custom Time Range".to_string(),
            lower: Some("2024-01-01 00:00".to_string()),
            upper: Some("2024-01-02 00:00".to_string()),
        });
        let json = serde_json::to_string(&range).unwrap();
        let back: TimeRange = serde_json::from_str(&json).unwrap();
        assert_eq!(back, range);
    }

    #[test]
    fn test_deserialize_discriminates_on_type() {
        let json = r#"{
            "seconds": 300,
            "lower": "now() - 5m",
            "upper": null,
            "label": "Past 5m",
            "duration": "5m",
            "type": "selectable-duration"
        }"#;
        let range: TimeRange = serde_json::from_str(json).unwrap();
        assert_eq!(range, TimeRange::from(past_five_minutes()));
    }

    #[test]
    fn test_label_and_display() {
        let range = TimeRange::from(past_five_minutes());
        assert_eq!(range.label(), "Past 5m");
        assert_eq!(range.to_string(), "Past 5m");
    }
}
