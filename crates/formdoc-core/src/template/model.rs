//! Template and field declarations

use serde::{Deserialize, Serialize};

use crate::format::is_date_key;

/// A fillable document template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Template {
    /// Unique template id
    pub id: String,
    /// Display name
    pub name: String,
    /// Form inputs, in display order
    #[serde(default)]
    pub fields: Vec<FieldDeclaration>,
    /// Markup with embedded `{{...}}` tokens
    #[serde(rename = "previewHTML")]
    pub preview_html: String,
}

impl Template {
    /// Create a template without fields
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        preview_html: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            fields: Vec::new(),
            preview_html: preview_html.into(),
        }
    }

    /// Append a field declaration
    pub fn with_field(mut self, field: FieldDeclaration) -> Self {
        self.fields.push(field);
        self
    }

    /// Look up a field declaration by id
    pub fn field(&self, id: &str) -> Option<&FieldDeclaration> {
        self.fields.iter().find(|f| f.id == id)
    }

    /// Copy of this template with date-named `text` fields promoted to `date`
    pub fn normalized(&self) -> Self {
        let mut template = self.clone();
        for field in &mut template.fields {
            if field.kind == FieldType::Text && is_date_key(&field.id) {
                field.kind = FieldType::Date;
            }
        }
        template
    }

    /// Starter template shown to authors writing a new one
    pub fn skeleton() -> Self {
        Self::new(
            "meu-template-id",
            "Meu Template Exemplo",
            SKELETON_PREVIEW,
        )
        .with_field(FieldDeclaration::new(
            "campo_texto",
            "Campo de Texto",
            FieldType::Text,
        ))
        .with_field(
            FieldDeclaration::new("opcao", "Opcao", FieldType::Radio)
                .with_options(&[("A", "a"), ("B", "b")]),
        )
        .with_field(
            FieldDeclaration::new("marcacoes", "Marcacoes", FieldType::Checkboxes)
                .with_items(&[("m1", "Marcar 1"), ("m2", "Marcar 2")]),
        )
    }
}

const SKELETON_PREVIEW: &str = r#"
      <div class="doc-title">TITULO DO DOCUMENTO</div>
      <div class="doc-paragraph">Valor: {{campo_texto}}</div>
      <div class="doc-paragraph">Opcao A: {{#radio:opcao|a}} &nbsp; Opcao B: {{#radio:opcao|b}}</div>
      <div class="doc-paragraph">Marcacoes: {{#check:m1}} M1 &nbsp; {{#check:m2}} M2</div>
    "#;

/// Kind of form input a field declares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Date,
    Number,
    Select,
    Radio,
    Checkboxes,
    Checkbox,
    Textarea,
    Installments,
    /// Any type name this crate does not know; treated as a plain scalar
    #[serde(other)]
    Other,
}

impl FieldType {
    /// Name used in template JSON
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Date => "date",
            FieldType::Number => "number",
            FieldType::Select => "select",
            FieldType::Radio => "radio",
            FieldType::Checkboxes => "checkboxes",
            FieldType::Checkbox => "checkbox",
            FieldType::Textarea => "textarea",
            FieldType::Installments => "installments",
            FieldType::Other => "other",
        }
    }
}

/// One form input of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDeclaration {
    pub id: String,
    #[serde(default)]
    pub label: String,
    #[serde(rename = "type", default)]
    pub kind: FieldType,
    /// Choices for `select` / `radio`; the first one is the default
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    /// Boolean sub-fields of a `checkboxes` group
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<CheckItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
}

impl FieldDeclaration {
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FieldType) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            kind,
            options: Vec::new(),
            items: Vec::new(),
            placeholder: None,
        }
    }

    /// Set `(label, value)` choices
    pub fn with_options(mut self, options: &[(&str, &str)]) -> Self {
        self.options = options
            .iter()
            .map(|(label, value)| FieldOption {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect();
        self
    }

    /// Set `(id, label)` checkbox items
    pub fn with_items(mut self, items: &[(&str, &str)]) -> Self {
        self.items = items
            .iter()
            .map(|(id, label)| CheckItem {
                id: id.to_string(),
                label: label.to_string(),
            })
            .collect();
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldOption {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckItem {
    pub id: String,
    pub label: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_template_json() {
        let json = r#"{
            "id": "t1",
            "name": "Teste",
            "fields": [
                { "id": "nome", "label": "Nome", "type": "text", "placeholder": "Fulano" },
                { "id": "tipo", "label": "Tipo", "type": "radio",
                  "options": [ { "label": "A", "value": "a" } ] },
                { "id": "perms", "label": "Permissões", "type": "checkboxes",
                  "items": [ { "id": "p1", "label": "P1" } ] },
                { "id": "x", "label": "X", "type": "colorpicker" }
            ],
            "previewHTML": "{{nome}}"
        }"#;

        let template: Template = serde_json::from_str(json).unwrap();
        assert_eq!(template.id, "t1");
        assert_eq!(template.preview_html, "{{nome}}");
        assert_eq!(template.fields.len(), 4);
        assert_eq!(template.fields[0].placeholder.as_deref(), Some("Fulano"));
        assert_eq!(template.fields[1].options[0].value, "a");
        assert_eq!(template.fields[2].items[0].id, "p1");
        assert_eq!(template.fields[3].kind, FieldType::Other);
    }

    #[test]
    fn test_serialize_uses_preview_html_key() {
        let json = serde_json::to_value(Template::new("a", "A", "<p/>")).unwrap();
        assert_eq!(json["previewHTML"], "<p/>");
        assert_eq!(json["fields"], serde_json::json!([]));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let template: Template =
            serde_json::from_str(r#"{"id":"a","name":"A","previewHTML":"x"}"#).unwrap();
        assert!(template.fields.is_empty());
    }

    #[test]
    fn test_normalized_promotes_date_named_text_fields() {
        let template = Template::new("a", "A", "")
            .with_field(FieldDeclaration::new("data_assinatura", "Data", FieldType::Text))
            .with_field(FieldDeclaration::new("nome", "Nome", FieldType::Text))
            .with_field(FieldDeclaration::new("p1_venc", "Venc", FieldType::Textarea));

        let normalized = template.normalized();
        assert_eq!(normalized.fields[0].kind, FieldType::Date);
        assert_eq!(normalized.fields[1].kind, FieldType::Text);
        assert_eq!(normalized.fields[2].kind, FieldType::Textarea);
        // Original is untouched
        assert_eq!(template.fields[0].kind, FieldType::Text);
    }

    #[test]
    fn test_field_type_names_match_json() {
        for kind in [
            FieldType::Text,
            FieldType::Date,
            FieldType::Number,
            FieldType::Select,
            FieldType::Radio,
            FieldType::Checkboxes,
            FieldType::Checkbox,
            FieldType::Textarea,
            FieldType::Installments,
        ] {
            assert_eq!(serde_json::to_value(kind).unwrap(), kind.as_str());
        }
    }

    #[test]
    fn test_skeleton_shape() {
        let skeleton = Template::skeleton();
        assert_eq!(skeleton.id, "meu-template-id");
        assert_eq!(skeleton.fields.len(), 3);
        assert!(skeleton.preview_html.contains("{{#radio:opcao|a}}"));
        assert!(skeleton.field("marcacoes").is_some());
    }
}
