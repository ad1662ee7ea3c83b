//! Reading templates authored as JSON

use serde_json::Value;

use super::error::TemplateError;
use super::model::Template;

/// Keys a template document must carry with a non-empty value
pub const REQUIRED_FIELDS: [&str; 3] = ["id", "name", "previewHTML"];

/// Parse and validate a template document
///
/// Missing required keys are all reported together, before any shape
/// checking of the rest of the document.
pub fn parse_template(json: &str) -> Result<Template, TemplateError> {
    let raw: Value = serde_json::from_str(json).map_err(|e| TemplateError::InvalidJson {
        message: e.to_string(),
    })?;

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|key| !is_present(raw.get(**key)))
        .map(|key| key.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(TemplateError::MissingFields { fields: missing });
    }

    serde_json::from_value(raw).map_err(|e| TemplateError::InvalidStructure {
        message: e.to_string(),
    })
}

/// Present means set to something other than null, `false`, `0` or `""`
fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}
