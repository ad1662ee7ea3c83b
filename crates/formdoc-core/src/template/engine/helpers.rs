//! Helper functions for template rendering

use crate::template::value::ValueMap;

/// Checkbox marker in its ticked state
pub(crate) const BOX_CHECKED: &str = r#"<span class="box checked"></span>"#;

/// Checkbox marker in its empty state
pub(crate) const BOX_UNCHECKED: &str = r#"<span class="box"></span>"#;

/// Marker span for `{{#check}}` and `{{#radio}}`
pub(crate) fn checkbox_markup(checked: bool) -> &'static str {
    if checked {
        BOX_CHECKED
    } else {
        BOX_UNCHECKED
    }
}

/// Whether the value under `key` reads as exactly `literal`
///
/// Absent keys never match.
pub(crate) fn equals_literal(values: &ValueMap, key: &str, literal: &str) -> bool {
    values.get(key).is_some_and(|v| v.to_text() == literal)
}

/// Whether the value under `key` is truthy; absent keys are not
pub(crate) fn is_truthy(values: &ValueMap, key: &str) -> bool {
    values.get(key).is_some_and(|v| v.is_truthy())
}
