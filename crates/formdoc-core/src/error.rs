use std::path::PathBuf;
use thiserror::Error;

use crate::template::error::TemplateError;

#[derive(Error, Debug)]
pub enum FormdocError {
    // Template errors
    #[error("TEMPLATE_NOT_FOUND: template '{0}' not found")]
    TemplateNotFound(String),

    #[error("TEMPLATE_INVALID: {0}")]
    TemplateInvalid(#[from] TemplateError),

    #[error("TEMPLATE_FILE_INVALID: '{path}': {source}")]
    TemplateFileInvalid {
        path: PathBuf,
        source: TemplateError,
    },

    // Value map errors
    #[error("DATA_INVALID: failed to parse value map: {0}")]
    DataInvalid(String),

    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID: failed to parse formdoc.toml: {0}")]
    ConfigInvalid(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for FormdocError {
    fn from(err: serde_json::Error) -> Self {
        FormdocError::Generic(format!("JSON error: {}", err))
    }
}

impl From<walkdir::Error> for FormdocError {
    fn from(err: walkdir::Error) -> Self {
        FormdocError::Generic(format!("Directory walk error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, FormdocError>;
