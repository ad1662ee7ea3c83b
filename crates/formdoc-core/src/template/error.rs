//! Template import errors

use std::fmt;

/// Reasons a template document is rejected
///
/// Rendering itself never fails; these only arise when a template is read
/// from JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Input is not JSON at all
    InvalidJson {
        /// Parser message
        message: String,
    },

    /// One or more of `id`, `name`, `previewHTML` is absent or empty
    MissingFields {
        /// Missing field names, in declaration order
        fields: Vec<String>,
    },

    /// Required fields are present but the document has the wrong shape
    InvalidStructure {
        /// Deserializer message
        message: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::InvalidJson { message } => {
                write!(f, "Invalid template JSON: {}", message)
            }
            TemplateError::MissingFields { fields } => {
                write!(
                    f,
                    "Invalid template: missing required field(s) {}",
                    fields.join(", ")
                )
            }
            TemplateError::InvalidStructure { message } => {
                write!(f, "Invalid template structure: {}", message)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
