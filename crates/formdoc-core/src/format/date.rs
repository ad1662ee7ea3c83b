//! Date reformatting

use super::html::escape_html;

/// Whether `value` is exactly `YYYY-MM-DD` (digits only, no calendar check)
pub fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Reorder an ISO date into `DD/MM/YYYY`
///
/// Callers check [`is_iso_date`] first.
pub(crate) fn iso_to_br(value: &str) -> String {
    format!("{}/{}/{}", &value[8..10], &value[5..7], &value[..4])
}

/// Format a date for display: ISO dates become `DD/MM/YYYY`, anything else
/// is escaped as-is
pub fn format_date_br(value: &str) -> String {
    if value.is_empty() {
        String::new()
    } else if is_iso_date(value) {
        iso_to_br(value)
    } else {
        escape_html(value)
    }
}
