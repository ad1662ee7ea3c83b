//! Digit masks for Brazilian identifiers and currency

use super::keys::is_currency_key;
use crate::template::{FieldDeclaration, FieldType};

/// Maximum digits in a CPF
const CPF_DIGITS: usize = 11;

/// Maximum digits in a CNPJ
const CNPJ_DIGITS: usize = 14;

/// Strip every character that is not an ASCII digit
pub fn digits_only(value: &str) -> String {
    value.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Mask a CPF progressively: `000.000.000-00`
///
/// Separators appear only once enough digits are present, so partial input
/// keeps a valid prefix of the final shape.
pub fn mask_cpf(value: &str) -> String {
    let mut digits = digits_only(value);
    digits.truncate(CPF_DIGITS);
    let v = digits.as_str();

    match v.len() {
        n if n > 9 => format!("{}.{}.{}-{}", &v[..3], &v[3..6], &v[6..9], &v[9..]),
        n if n > 6 => format!("{}.{}.{}", &v[..3], &v[3..6], &v[6..]),
        n if n > 3 => format!("{}.{}", &v[..3], &v[3..]),
        _ => digits,
    }
}

/// Mask a CNPJ progressively: `00.000.000/0000-00`
pub fn mask_cnpj(value: &str) -> String {
    let mut digits = digits_only(value);
    digits.truncate(CNPJ_DIGITS);
    let v = digits.as_str();

    match v.len() {
        n if n > 12 => format!(
            "{}.{}.{}/{}-{}",
            &v[..2],
            &v[2..5],
            &v[5..8],
            &v[8..12],
            &v[12..]
        ),
        n if n > 8 => format!("{}.{}.{}/{}", &v[..2], &v[2..5], &v[5..8], &v[8..]),
        n if n > 5 => format!("{}.{}.{}", &v[..2], &v[2..5], &v[5..]),
        n if n > 2 => format!("{}.{}", &v[..2], &v[2..]),
        _ => digits,
    }
}

/// Format the digits of `value` as a BRL amount in cents: `R$ 1.234,56`
///
/// Input without any digit yields an empty string. The digit string is
/// handled as text, so arbitrarily long amounts keep every digit.
pub fn mask_brl(value: &str) -> String {
    let digits = digits_only(value);
    if digits.is_empty() {
        return String::new();
    }

    let significant = digits.trim_start_matches('0');
    let padded = format!("{:0>3}", significant);
    let (reais, centavos) = padded.split_at(padded.len() - 2);

    format!("R$ {},{}", group_thousands(reais), centavos)
}

/// Insert `.` between every group of three digits, from the right
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

/// Mask user input typed into a form field
///
/// Only `text` fields are masked: ids mentioning `cnpj` or `cpf` get the
/// identifier mask, currency-like ids get the BRL mask. Returns `None` when
/// the value should be kept as typed.
pub fn mask_input(field: &FieldDeclaration, value: &str) -> Option<String> {
    if field.kind != FieldType::Text {
        return None;
    }

    let id = field.id.to_lowercase();
    if id.contains("cnpj") {
        Some(mask_cnpj(value))
    } else if id.contains("cpf") {
        Some(mask_cpf(value))
    } else if is_currency_key(&id) {
        Some(mask_brl(value))
    } else {
        None
    }
}
