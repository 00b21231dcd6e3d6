//! Scaffolding error types

use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while preparing a project
#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Skipped template source {path}: {reason}")]
    TemplateSource { path: PathBuf, reason: String },

    #[error("Failed to render manifest: {0}")]
    Render(String),

    #[error("Failed to create {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScaffoldError {
    /// Build an I/O failure for the given path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The path this error refers to, if any
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::Validation(_) | Self::Render(_) => None,
            Self::TemplateSource { path, .. } | Self::Io { path, .. } => Some(path),
        }
    }
}

/// Ensure the project name is usable before any filesystem work happens
pub fn validate_project_name(name: &str) -> Result<&str, ScaffoldError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ScaffoldError::Validation("project name must not be empty".to_string()));
    }
    if !is_single_name(trimmed) {
        return Err(ScaffoldError::Validation(format!(
            "project name must be a single folder name: {}",
            trimmed
        )));
    }
    Ok(trimmed)
}

/// True when `name` is one plain path component (no separators, `.` or `..`)
pub fn is_single_name(name: &str) -> bool {
    if name.contains(['/', '\\']) {
        return false;
    }
    let components: Vec<_> = Path::new(name).components().collect();
    matches!(components.as_slice(), [Component::Normal(_)])
}

/// True when `path` stays beneath whatever directory it is joined to
pub fn is_contained_relative(path: &str) -> bool {
    let mut normal = false;
    for component in Path::new(path).components() {
        match component {
            Component::Normal(_) => normal = true,
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return false,
        }
    }
    normal
}
