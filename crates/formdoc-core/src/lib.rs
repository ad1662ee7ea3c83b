//! Form-driven document templates for pt-BR legal paperwork
//!
//! A template's HTML body is filled from a map of form values: identifiers
//! get their CPF/CNPJ masks, amounts become BRL, ISO dates become
//! `DD/MM/YYYY`, and everything else is HTML-escaped.

// Core modules
pub mod config;
pub mod error;
pub mod export;
pub mod format;
pub mod repository;
pub mod template;

// Re-export commonly used types
pub use config::Config;
pub use error::{FormdocError, Result};
pub use repository::{MemoryRepository, TemplateRepository};
pub use template::{create_initial_data, render, Template, TemplateEngine, ValueMap};
