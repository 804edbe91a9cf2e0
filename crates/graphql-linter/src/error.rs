use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, LintError>;

/// Failures that stop a lint run. Problems inside a single schema file are
/// reported as diagnostics instead.
#[derive(Debug, Error)]
pub enum LintError {
    #[error("Configuration error: {0}")]
    Config(#[from] graphql_linter_config::ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("No .graphql or .graphqls files found in {}", .0.display())]
    NoSchemaFiles(PathBuf),

    #[error("Target path does not exist: {}", .0.display())]
    TargetNotFound(PathBuf),
}
