//! View models for the dashboard regions
//!
//! Each region is described by plain data derived from the current
//! document; the components in [`crate::components`] turn that data into
//! markup. Nothing here touches the DOM.
//!
//! - [`header`] - version tags and the gateway info line
//! - [`server`] - listener summary and the status badge
//! - [`plugins`] - global plugin list
//! - [`routes`] - filterable route cards
//! - [`card`] - per-card expand/collapse state machine
//! - [`error`] - page error surface

pub mod card;
pub mod error;
pub mod header;
pub mod plugins;
pub mod routes;
pub mod server;

use serde_json::Value;

use crate::model::{non_empty, Settings};

/// Shown for absent or blank text
pub const PLACEHOLDER: &str = "-";

/// Shown for absent numeric values
pub const NOT_AVAILABLE: &str = "N/A";

/// Number of settings shown in a compact summary
pub const COMPACT_ENTRIES: usize = 3;

/// The text itself, or the placeholder when blank
pub fn or_placeholder(value: Option<&str>) -> String {
    non_empty(value).unwrap_or(PLACEHOLDER).to_string()
}

/// Label/value pair rendered as one meta row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoItem {
    pub label: &'static str,
    pub value: String,
}

impl InfoItem {
    pub fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// One-line summary of settings: the first entries as `key: value`,
/// followed by `...` when there are more.
pub fn compact_settings(settings: &Settings) -> String {
    if settings.is_empty() {
        return "{}".to_string();
    }
    let shown: Vec<String> = settings
        .iter()
        .take(COMPACT_ENTRIES)
        .map(|(key, value)| format!("{}: {}", key, display_value(value)))
        .collect();
    let mut line = shown.join(", ");
    if settings.len() > COMPACT_ENTRIES {
        line.push_str(", ...");
    }
    line
}

/// Strings without quotes, everything else as compact JSON
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn settings(value: Value) -> Settings {
        match value {
            Value::Object(map) => map,
            _ => Settings::new(),
        }
    }

    #[test]
    fn test_compact_settings_truncates_after_three() {
        let s = settings(json!({"a": 1, "b": 2, "c": 3, "d": 4}));
        assert_eq!(compact_settings(&s), "a: 1, b: 2, c: 3, ...");
    }

    #[test]
    fn test_compact_settings_exactly_three() {
        let s = settings(json!({"a": 1, "b": 2, "c": 3}));
        assert_eq!(compact_settings(&s), "a: 1, b: 2, c: 3");
    }

    #[test]
    fn test_compact_settings_values() {
        let s = settings(json!({"mode": "strict", "limits": [1, 2], "on": null}));
        assert_eq!(compact_settings(&s), "mode: strict, limits: [1,2], on: null");
        assert_eq!(compact_settings(&Settings::new()), "{}");
    }

    #[test]
    fn test_or_placeholder() {
        assert_eq!(or_placeholder(None), "-");
        assert_eq!(or_placeholder(Some("  ")), "-");
        assert_eq!(or_placeholder(Some("a&b")), "a&b");
    }
}
