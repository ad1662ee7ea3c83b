//! Project configuration (`formdoc.toml`)

mod model;

pub use model::{Config, DocumentConfig, TemplatesConfig, CONFIG_FILE};
