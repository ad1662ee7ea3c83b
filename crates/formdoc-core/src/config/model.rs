use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FormdocError, Result};

/// Name of the configuration file looked up from the working directory
pub const CONFIG_FILE: &str = "formdoc.toml";

/// formdoc.toml schema
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub document: DocumentConfig,
}

/// Where templates come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplatesConfig {
    /// Directory of `*.json` templates, relative to the config file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
    /// Include the built-in templates
    #[serde(default = "default_builtin")]
    pub builtin: bool,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            dir: None,
            builtin: true,
        }
    }
}

fn default_builtin() -> bool {
    true
}

/// Page setup of exported documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// CSS `@page` size keyword
    #[serde(default = "default_page_size")]
    pub page_size: String,
    #[serde(default = "default_margin_mm")]
    pub margin_mm: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            margin_mm: default_margin_mm(),
            font_family: default_font_family(),
        }
    }
}

fn default_page_size() -> String {
    "A4".to_string()
}

fn default_margin_mm() -> f64 {
    25.4
}

fn default_font_family() -> String {
    "Arial, sans-serif".to_string()
}

impl Config {
    /// Read and validate a formdoc.toml
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| FormdocError::ConfigParseError(e.to_string()))?;

        let config: Self =
            toml::from_str(&content).map_err(|e| FormdocError::ConfigInvalid(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Write this configuration as TOML
    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FormdocError::ConfigParseError(e.to_string()))?;

        std::fs::write(path.as_ref(), content).map_err(FormdocError::IoError)?;

        Ok(())
    }

    /// Find formdoc.toml in `start` or its nearest ancestor
    pub fn find(start: impl AsRef<Path>) -> Option<PathBuf> {
        start
            .as_ref()
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|candidate| candidate.is_file())
    }

    /// Template directory resolved against the config file's directory
    pub fn templates_dir(&self, base: &Path) -> Option<PathBuf> {
        self.templates.dir.as_ref().map(|dir| base.join(dir))
    }

    fn validate(&self) -> Result<()> {
        if self.document.page_size.trim().is_empty() {
            return Err(FormdocError::ConfigInvalid(
                "document.page_size must not be empty".to_string(),
            ));
        }
        if !self.document.margin_mm.is_finite() || self.document.margin_mm < 0.0 {
            return Err(FormdocError::ConfigInvalid(format!(
                "document.margin_mm must be a non-negative number, got {}",
                self.document.margin_mm
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formdoc_testkit::temp_dir_in_workspace;

    #[test]
    fn test_parse_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.templates.builtin);
        assert_eq!(config.document.page_size, "A4");
        assert_eq!(config.document.margin_mm, 25.4);
        assert_eq!(config.document.font_family, "Arial, sans-serif");
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
[templates]
dir = "modelos"
builtin = false

[document]
page_size = "Letter"
margin_mm = 20.0
font_family = "Times New Roman"
"#;
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.templates.dir, Some(PathBuf::from("modelos")));
        assert!(!config.templates.builtin);
        assert_eq!(config.document.page_size, "Letter");
        assert_eq!(config.document.margin_mm, 20.0);
        assert_eq!(config.document.font_family, "Times New Roman");
    }

    #[test]
    fn test_roundtrip_file() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.templates.dir = Some(PathBuf::from("templates"));
        config.to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_from_file_missing() {
        let temp = temp_dir_in_workspace();
        let err = Config::from_file(temp.path().join(CONFIG_FILE)).unwrap_err();
        assert!(matches!(err, FormdocError::ConfigParseError(_)));
    }

    #[test]
    fn test_from_file_invalid_toml() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[document]\nmargin_mm = \"wide\"\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(matches!(err, FormdocError::ConfigInvalid(_)));
    }

    #[test]
    fn test_from_file_rejects_negative_margin() {
        let temp = temp_dir_in_workspace();
        let path = temp.path().join(CONFIG_FILE);
        std::fs::write(&path, "[document]\nmargin_mm = -1.0\n").unwrap();

        let err = Config::from_file(&path).unwrap_err();
        assert!(err.to_string().contains("margin_mm"));
    }

    #[test]
    fn test_find_walks_up_to_ancestor() {
        let temp = temp_dir_in_workspace();
        let root = temp.path();
        let nested = root.join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        Config::default().to_file(root.join(CONFIG_FILE)).unwrap();

        assert_eq!(Config::find(&nested), Some(root.join(CONFIG_FILE)));
    }

    #[test]
    fn test_templates_dir_is_relative_to_base() {
        let mut config = Config::default();
        assert_eq!(config.templates_dir(Path::new("/proj")), None);

        config.templates.dir = Some(PathBuf::from("templates"));
        assert_eq!(
            config.templates_dir(Path::new("/proj")),
            Some(PathBuf::from("/proj/templates"))
        );
    }
}
