//! Mask command - input masking as applied while typing

use crate::output::print_text;
use anyhow::Result;
use formdoc_core::format::mask_input;
use formdoc_core::template::{FieldDeclaration, FieldType};

/// Print `value` as a text field named `field` would hold it
///
/// Fields with no mask print the value unchanged.
pub fn run(field: String, value: String) -> Result<()> {
    let declaration = FieldDeclaration::new(field.as_str(), field.as_str(), FieldType::Text);
    let masked = mask_input(&declaration, &value).unwrap_or(value);
    print_text(&masked)?;
    Ok(())
}
