//! Locale-aware value formatting (pt-BR)
//!
//! Pure, total functions turning raw field values into display text:
//!
//! - CPF / CNPJ identifier masks
//! - BRL currency amounts from digit strings in cents
//! - ISO dates reordered to `DD/MM/YYYY`
//! - HTML escaping for everything else
//!
//! [`format_value`] picks the transform from the field name.

mod date;
mod html;
mod keys;
mod mask;

pub use date::{format_date_br, is_iso_date};
pub use html::escape_html;
pub use keys::{is_currency_key, is_date_key};
pub use mask::{digits_only, mask_brl, mask_cnpj, mask_cpf, mask_input};

use crate::template::FieldValue;

/// Format a value for the field named `key`
///
/// Checks run in a fixed order: `cnpj`, then `cpf`, then currency names,
/// then date names. An absent value renders as an empty string.
pub fn format_value(key: &str, value: Option<&FieldValue>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    let text = value.to_text();
    let key = key.to_lowercase();

    if key.contains("cnpj") {
        escape_html(&mask_cnpj(&text))
    } else if key.contains("cpf") {
        escape_html(&mask_cpf(&text))
    } else if is_currency_key(&key) {
        escape_html(&mask_brl(&text))
    } else if is_date_key(&key) && is_iso_date(&text) {
        date::iso_to_br(&text)
    } else {
        escape_html(&text)
    }
}
