//! Error types for schema loading.

use thiserror::Error;

use crate::ConfigurationDefect;

/// Errors that can occur while loading a schema declaration.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON parsing failure.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// YAML parsing failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// File extension is neither JSON nor YAML.
    #[error("unsupported schema format: {0}")]
    UnsupportedFormat(String),

    /// The declaration parsed but contains a broken alias.
    #[error("invalid schema: {0}")]
    Defect(#[from] ConfigurationDefect),
}

/// Convenience alias for results with [`SchemaError`].
pub type Result<T> = std::result::Result<T, SchemaError>;
