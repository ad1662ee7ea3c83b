//! Global context for CLI commands

use anyhow::{Context as _, Result};
use formdoc_core::config::Config;
use formdoc_core::repository::{MemoryRepository, TemplateRepository};
use formdoc_core::template::{
    FieldType, INSTALLMENT_COUNT_KEY, Template, ValueMap, create_initial_data,
};
use formdoc_core::FormdocError;
use std::env;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Configuration and the templates it makes available
pub struct Context {
    pub config: Config,
    pub repository: MemoryRepository,
    pub verbose: bool,
}

impl Context {
    /// Load configuration and populate the template repository
    ///
    /// Without an explicit path, the nearest formdoc.toml from the current
    /// directory is used; with none at all, defaults apply.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Config file cannot be read or parsed
    /// - The configured template directory cannot be walked
    pub fn new(config_path: Option<PathBuf>, verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;

        let (config, base) = match config_path.or_else(|| Config::find(&current_dir)) {
            Some(path) => {
                debug!(path = %path.display(), "using config");
                let config = Config::from_file(&path)?;
                let base = path
                    .parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| current_dir.clone());
                (config, base)
            }
            None => (Config::default(), current_dir),
        };

        let mut repository = if config.templates.builtin {
            MemoryRepository::with_builtins()
        } else {
            MemoryRepository::new()
        };

        if let Some(dir) = config.templates_dir(&base) {
            if dir.is_dir() {
                let loaded = repository.load_dir(&dir)?;
                debug!(dir = %dir.display(), loaded, "loaded template directory");
            } else {
                warn!(dir = %dir.display(), "template directory does not exist");
            }
        }

        Ok(Self {
            config,
            repository,
            verbose,
        })
    }

    /// Template by id, with date-named text fields promoted to dates
    pub fn template(&self, id: &str) -> Result<Template> {
        Ok(self.repository.require(id)?.normalized())
    }

    /// Values for rendering `template`
    ///
    /// Starts from the template's initial values and overlays the JSON
    /// object in `data`. The installment list is resized when the overlay
    /// sets the installment count.
    pub fn values(&self, template: &Template, data: Option<&Path>) -> Result<ValueMap> {
        let mut values = create_initial_data(Some(template));
        let Some(path) = data else {
            return Ok(values);
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read data file {}", path.display()))?;
        let overlay: ValueMap = serde_json::from_str(&content)
            .map_err(|e| FormdocError::DataInvalid(format!("{}: {}", path.display(), e)))?;

        let resize = overlay.contains_key(INSTALLMENT_COUNT_KEY)
            && template
                .fields
                .iter()
                .any(|f| f.kind == FieldType::Installments);
        values.extend(overlay);
        if resize {
            values.sync_installments();
        }

        Ok(values)
    }
}
