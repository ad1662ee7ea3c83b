//! Test utilities for formdoc
//!
//! Shared temporary-directory and fixture helpers used across the formdoc
//! workspace.

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small template exercising every token form
pub const SAMPLE_TEMPLATE_JSON: &str = r#"{
  "id": "recibo",
  "name": "Recibo de Pagamento",
  "fields": [
    { "id": "pagador_nome", "label": "Pagador", "type": "text" },
    { "id": "pagador_cpf", "label": "CPF do Pagador", "type": "text" },
    { "id": "valor_pago", "label": "Valor (R$)", "type": "text" },
    { "id": "data", "label": "Data", "type": "date" },
    { "id": "forma", "label": "Forma", "type": "radio", "options": [
      { "label": "PIX", "value": "pix" },
      { "label": "Boleto", "value": "boleto" }
    ]},
    { "id": "confirmacoes", "label": "Confirmações", "type": "checkboxes", "items": [
      { "id": "conf_quitado", "label": "Quitado" }
    ]},
    { "id": "qtd_parcelas", "label": "Parcelas", "type": "number" },
    { "id": "parcelas", "label": "Parcelas", "type": "installments" }
  ],
  "previewHTML": "<p>{{pagador_nome}} ({{pagador_cpf}}) pagou {{valor_pago}} em {{data}}.</p><p>{{#radio:forma|pix}} PIX {{#radio:forma|boleto}} Boleto</p><p>{{#check:conf_quitado}} Quitado</p>{{#if:forma|boleto}}<p>Boleto</p>{{/if}}<table>{{parcelas_rows}}</table>"
}"#;

/// Value map for [`SAMPLE_TEMPLATE_JSON`]
pub const SAMPLE_VALUES_JSON: &str = r#"{
  "pagador_nome": "Maria & Filhos",
  "pagador_cpf": "12345678901",
  "valor_pago": "123456",
  "data": "2024-03-09",
  "forma": "pix",
  "conf_quitado": true,
  "qtd_parcelas": "1",
  "parcelas": [{ "venc": "2024-04-01", "valor": "10000" }]
}"#;

/// A template document missing `name` and `previewHTML`
pub const INCOMPLETE_TEMPLATE_JSON: &str = r#"{ "id": "quebrado", "fields": [] }"#;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// Cargo runs tests from the package root, so every test's scratch files
/// land in one gitignored place. The directory is removed on drop.
///
/// # Panics
///
/// Panics if the current directory cannot be read or `.tmp/` cannot be
/// created.
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

/// Write `contents` to `dir/name`, creating `dir` if needed
///
/// # Panics
///
/// Panics on any I/O failure.
pub fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
    std::fs::create_dir_all(dir).expect("Failed to create fixture directory");
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write fixture");
    path
}
