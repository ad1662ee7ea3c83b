//! Default value maps for a blank form

use super::model::{FieldType, Template};
use super::value::{FieldValue, ValueMap};

/// Build the value map of an untouched form
///
/// Toggles start unchecked, choices start at their first option, installment
/// lists start empty and everything else starts as an empty string. Every
/// call returns a fresh map.
pub fn create_initial_data(template: Option<&Template>) -> ValueMap {
    let mut data = ValueMap::new();
    let Some(template) = template else {
        return data;
    };

    for field in &template.fields {
        match field.kind {
            FieldType::Checkboxes => {
                for item in &field.items {
                    data.insert(item.id.clone(), false);
                }
            }
            FieldType::Checkbox => data.insert(field.id.clone(), false),
            FieldType::Radio | FieldType::Select => {
                let first = field
                    .options
                    .first()
                    .map(|o| o.value.clone())
                    .unwrap_or_default();
                data.insert(field.id.clone(), first);
            }
            FieldType::Installments => {
                data.insert(field.id.clone(), FieldValue::Installments(Vec::new()))
            }
            FieldType::Text
            | FieldType::Date
            | FieldType::Number
            | FieldType::Textarea
            | FieldType::Other => data.insert(field.id.clone(), ""),
        }
    }

    data
}
