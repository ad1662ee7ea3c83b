//! Standalone document export
//!
//! Rendered template bodies are fragments. Printing or saving them needs a
//! complete HTML page with the document stylesheet, which is what
//! [`wrap_document`] builds. [`word_document`] produces the same page in the
//! form Word opens as a `.doc` file.

use crate::config::DocumentConfig;
use crate::format::escape_html;
use crate::template::Template;

/// Title and file stem used when no template is selected
pub const FALLBACK_NAME: &str = "documento";

/// UTF-8 byte order mark; Word needs it to detect the encoding
pub const UTF8_BOM: char = '\u{feff}';

/// Classes used by template bodies and by the checkbox markers
const STYLESHEET: &str = r#"
    .doc-title { font-size: 16pt; font-weight: 700; text-align: center; margin-bottom: 10mm; }
    .doc-section-title { font-weight: 600; margin: 10px 0 4px; }
    .doc-small { font-size: 10pt; color: #334155; }
    .doc-paragraph { margin: 8px 0; line-height: 1.4; text-align: justify; }
    .box { display: inline-block; width: 14px; height: 14px; border: 1px solid #334155; margin-right: 6px; vertical-align: -2px; position: relative; border-radius: 2px; }
    .box.checked::after { content: "\2713"; position: absolute; left: 1px; top: -3px; font-size: 16px; color: #111827; }
    table { border-collapse: collapse; width: 100%; }
    th, td { border: 1px solid #cbd5e1; padding: 4px; }"#;

/// Wrap a rendered body in a complete printable HTML page
///
/// An empty title falls back to [`FALLBACK_NAME`]. The title is escaped; the
/// body is inserted as is.
pub fn wrap_document(title: &str, body: &str, document: &DocumentConfig) -> String {
    let title = if title.is_empty() {
        FALLBACK_NAME
    } else {
        title
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="pt-BR">
<head>
  <meta charset="utf-8" />
  <title>{title}</title>
  <style>
    @page {{ size: {size}; margin: {margin}mm; }}
    body {{ font-family: {font}; color: #111827; margin: {margin}mm; }}{STYLESHEET}
  </style>
</head>
<body>{body}</body>
</html>"#,
        title = escape_html(title),
        size = document.page_size,
        margin = document.margin_mm,
        font = document.font_family,
    )
}

/// Word-compatible export of a rendered template
///
/// The page from [`wrap_document`], titled after the template and prefixed
/// with a byte order mark.
pub fn word_document(template: Option<&Template>, body: &str, document: &DocumentConfig) -> String {
    let title = template.map(|t| t.name.as_str()).unwrap_or_default();
    let page = wrap_document(title, body, document);

    let mut output = String::with_capacity(page.len() + UTF8_BOM.len_utf8());
    output.push(UTF8_BOM);
    output.push_str(&page);
    output
}

/// File name of a Word export: `<id>.doc`
pub fn export_file_name(template: Option<&Template>) -> String {
    let stem = template
        .map(|t| t.id.as_str())
        .filter(|id| !id.is_empty())
        .unwrap_or(FALLBACK_NAME);
    format!("{stem}.doc")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_document_structure() {
        let page = wrap_document("Procuração", "<p>corpo</p>", &DocumentConfig::default());

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<html lang="pt-BR">"#));
        assert!(page.contains(r#"<meta charset="utf-8" />"#));
        assert!(page.contains("<title>Procuração</title>"));
        assert!(page.contains("@page { size: A4; margin: 25.4mm; }"));
        assert!(page.contains("font-family: Arial, sans-serif;"));
        assert!(page.contains(".box.checked::after"));
        assert!(page.contains("<body><p>corpo</p></body>"));
        assert!(page.ends_with("</html>"));
    }

    #[test]
    fn test_wrap_document_escapes_title_only() {
        let page = wrap_document("A & <B>", "<b>x</b>", &DocumentConfig::default());
        assert!(page.contains("<title>A &amp; &lt;B&gt;</title>"));
        assert!(page.contains("<body><b>x</b></body>"));
    }

    #[test]
    fn test_wrap_document_empty_title_falls_back() {
        let page = wrap_document("", "", &DocumentConfig::default());
        assert!(page.contains("<title>documento</title>"));
    }

    #[test]
    fn test_wrap_document_uses_page_setup() {
        let document = DocumentConfig {
            page_size: "Letter".to_string(),
            margin_mm: 20.0,
            font_family: "Georgia, serif".to_string(),
        };
        let page = wrap_document("t", "", &document);
        assert!(page.contains("@page { size: Letter; margin: 20mm; }"));
        assert!(page.contains("font-family: Georgia, serif; color: #111827; margin: 20mm;"));
    }

    #[test]
    fn test_word_document_has_bom_and_template_name() {
        let template = Template::new("procuracao-pf", "Procuração PF", "");
        let doc = word_document(Some(&template), "<p>x</p>", &DocumentConfig::default());

        assert!(doc.starts_with('\u{feff}'));
        assert!(doc[UTF8_BOM.len_utf8()..].starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>Procuração PF</title>"));
    }

    #[test]
    fn test_word_document_without_template() {
        let doc = word_document(None, "", &DocumentConfig::default());
        assert!(doc.contains("<title>documento</title>"));
    }

    #[test]
    fn test_export_file_name() {
        let template = Template::new("contrato-producao-musical", "Contrato", "");
        assert_eq!(
            export_file_name(Some(&template)),
            "contrato-producao-musical.doc"
        );
        assert_eq!(export_file_name(None), "documento.doc");
        assert_eq!(
            export_file_name(Some(&Template::new("", "Sem id", ""))),
            "documento.doc"
        );
    }
}
