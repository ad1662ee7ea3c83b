//! Template module - form-driven document templates
//!
//! A [`Template`] pairs an HTML body with the form fields that fill it. The
//! body is rendered against a [`ValueMap`] by pure text substitution.
//!
//! ## Syntax
//!
//! - Placeholders: `{{key}}` or `{{ key }}`, formatted by key name
//! - Conditional blocks: `{{#if:key|value}} ... {{/if}}`
//! - Checkbox markers: `{{#check:key}}`
//! - Radio markers: `{{#radio:group|value}}`
//! - Installment table rows: `{{parcelas_rows}}`
//!
//! Keys and compared values are made of ASCII letters, digits, `_` and `-`.
//! Anything that does not match a form above is left in the output verbatim.

pub mod engine;
pub mod error;
mod import;
mod initial;
mod model;
mod rows;
mod value;

pub use engine::{render, Pass, TemplateEngine};
pub use error::TemplateError;
pub use import::{parse_template, REQUIRED_FIELDS};
pub use initial::create_initial_data;
pub use model::{CheckItem, FieldDeclaration, FieldOption, FieldType, Template};
pub use rows::{installment_rows, EMPTY_INSTALLMENTS_ROW};
pub use value::{
    FieldValue, Installment, ValueMap, INSTALLMENTS_KEY, INSTALLMENT_COUNT_KEY, MAX_INSTALLMENTS,
};
