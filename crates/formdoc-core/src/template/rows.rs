//! Table rows for the installment list

use crate::format::{format_date_br, mask_brl};

use super::value::{ValueMap, INSTALLMENTS_KEY};

/// Row shown when no installment is defined
pub const EMPTY_INSTALLMENTS_ROW: &str =
    r#"<tr><td colspan="3" style="padding:6px; color:#64748b;">Nenhuma parcela definida.</td></tr>"#;

/// Render `parcelas` as `<tr>` rows: ordinal, due date, amount
///
/// Only rows are produced; the caller's template holds the `<table>` and its
/// header. A missing or non-list `parcelas` yields the placeholder row.
pub fn installment_rows(values: &ValueMap) -> String {
    let installments = values.installments(INSTALLMENTS_KEY);
    if installments.is_empty() {
        return EMPTY_INSTALLMENTS_ROW.to_string();
    }

    installments
        .iter()
        .enumerate()
        .map(|(i, installment)| {
            format!(
                r#"<tr>
      <td style="padding:4px;">{}ª</td>
      <td style="padding:4px;">{}</td>
      <td style="padding:4px;">{}</td>
    </tr>"#,
                i + 1,
                format_date_br(&installment.venc),
                mask_brl(&installment.valor)
            )
        })
        .collect()
}
