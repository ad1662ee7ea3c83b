//! Template repository
//!
//! Templates are kept in memory, in insertion order. The built-in set and
//! any directory of `*.json` template files can be loaded into it; nothing
//! is ever written back.

mod builtin;

pub use builtin::{builtin_templates, get_builtin_template, BUILTIN_TEMPLATE_IDS};

use std::path::Path;

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{FormdocError, Result};
use crate::template::{parse_template, Template};

/// Storage of templates keyed by id
pub trait TemplateRepository {
    /// All templates, in listing order
    fn list(&self) -> &[Template];

    /// Template with the given id
    fn get(&self, id: &str) -> Option<&Template>;

    /// Insert a template, replacing any existing one with the same id in place
    fn save(&mut self, template: Template);

    /// Remove the template with the given id, returning it
    fn remove(&mut self, id: &str) -> Option<Template>;

    /// Like [`get`](Self::get), failing with `TEMPLATE_NOT_FOUND`
    fn require(&self, id: &str) -> Result<&Template> {
        self.get(id)
            .ok_or_else(|| FormdocError::TemplateNotFound(id.to_string()))
    }
}

/// In-memory repository preserving insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    templates: Vec<Template>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Repository seeded with the built-in templates
    pub fn with_builtins() -> Self {
        let mut repository = Self::new();
        for template in builtin_templates() {
            repository.save(template);
        }
        repository
    }

    /// Import every `*.json` template directly inside `dir`
    ///
    /// Files are read in name order and saved over templates with the same
    /// id. Files that are not valid templates are skipped with a warning.
    /// Returns the number of templates imported.
    pub fn load_dir(&mut self, dir: impl AsRef<Path>) -> Result<usize> {
        let dir = dir.as_ref();
        debug!(dir = %dir.display(), "loading templates");

        let mut loaded = 0;
        for entry in WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|ext| ext != "json") {
                continue;
            }

            match load_template_file(path) {
                Ok(template) => {
                    debug!(id = %template.id, path = %path.display(), "loaded template");
                    self.save(template);
                    loaded += 1;
                }
                Err(err) => warn!(path = %path.display(), error = %err, "skipping template file"),
            }
        }

        Ok(loaded)
    }
}

impl TemplateRepository for MemoryRepository {
    fn list(&self) -> &[Template] {
        &self.templates
    }

    fn get(&self, id: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.id == id)
    }

    fn save(&mut self, template: Template) {
        match self.templates.iter_mut().find(|t| t.id == template.id) {
            Some(existing) => *existing = template,
            None => self.templates.push(template),
        }
    }

    fn remove(&mut self, id: &str) -> Option<Template> {
        let index = self.templates.iter().position(|t| t.id == id)?;
        Some(self.templates.remove(index))
    }
}

/// Read and validate one template file
pub fn load_template_file(path: impl AsRef<Path>) -> Result<Template> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    parse_template(&content).map_err(|source| FormdocError::TemplateFileInvalid {
        path: path.to_path_buf(),
        source,
    })
}
