use std::path::PathBuf;

use thiserror::Error;

/// Quire error types
#[derive(Error, Debug)]
pub enum QuireError {
    #[error("No drafts")]
    NoDrafts,

    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid title: {0}")]
    InvalidTitle(String),

    #[error("Post already exists: {}", .0.display())]
    PostExists(PathBuf),

    #[error("Template error: {0}")]
    TemplateRender(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Directory listing error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for Quire operations
pub type Result<T> = std::result::Result<T, QuireError>;
