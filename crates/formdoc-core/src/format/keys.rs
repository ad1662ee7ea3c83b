//! Field-name heuristics

/// Fragments marking a currency field
const CURRENCY_MARKERS: &[&str] = &["valor", "preco", "preço", "brl", "reais", "montante"];

/// Fragments marking a spelled-out amount, which is never currency-masked
const SPELLED_OUT_MARKERS: &[&str] = &["extenso", "por_extenso"];

/// Fragments marking a date field
const DATE_MARKERS: &[&str] = &["data", "venc", "vencimento", "date"];

/// Whether a field name denotes a currency amount
///
/// Case-insensitive. `valor_extenso` holds the amount written out in words
/// and is excluded.
pub fn is_currency_key(key: &str) -> bool {
    let key = key.to_lowercase();
    if SPELLED_OUT_MARKERS.iter().any(|m| key.contains(m)) {
        return false;
    }
    CURRENCY_MARKERS.iter().any(|m| key.contains(m))
}

/// Whether a field name denotes a date
pub fn is_date_key(key: &str) -> bool {
    let key = key.to_lowercase();
    DATE_MARKERS.iter().any(|m| key.contains(m))
}
