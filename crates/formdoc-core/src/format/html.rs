//! HTML escaping

/// Replace the HTML-reserved characters with entities
///
/// `&` is replaced first so entities introduced by later replacements are
/// not escaped again. Escaping already-escaped text escapes it twice; callers
/// apply this exactly once.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}
