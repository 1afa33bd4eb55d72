//! Error types for the registry and the application around it.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by [`Model`](crate::model::Model) queries.
///
/// Missing categories are never an error; finders return `None` or
/// [`Lookup::NotFound`](crate::model::Lookup::NotFound) for those.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("term '{term}' is ambiguous")]
    AmbiguousIdentifier { term: String },

    #[error("parent chain of kind '{identifier}' contains a cycle")]
    ParentCycle { identifier: String },
}

/// Application-level errors for occi-model.
#[derive(Error, Debug)]
pub enum AppError {
    // Registry errors
    #[error(transparent)]
    Model(#[from] ModelError),

    // Catalog errors
    #[error("Catalog not found: {}", .0.display())]
    CatalogNotFound(PathBuf),

    #[error("Failed to read catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog {}: {message}", path.display())]
    CatalogParse { path: PathBuf, message: String },

    #[error("Unsupported catalog format: {} (expected .toml or .json)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    // Config errors
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}
