//! Resolving where a project directory goes

use std::path::PathBuf;

use tracing::debug;

use crate::error::{ScaffoldError, validate_project_name};

/// Base directory the project folder is created in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootLocation {
    /// The working directory
    Current,
    /// The user's desktop folder
    Desktop,
    /// An explicit directory, `~/` is expanded
    Explicit(PathBuf),
}

impl RootLocation {
    /// Resolve the base directory
    pub fn base_dir(&self) -> Result<PathBuf, ScaffoldError> {
        match self {
            Self::Current => std::env::current_dir().map_err(|e| ScaffoldError::io(".", e)),
            Self::Desktop => dirs::desktop_dir()
                .or_else(|| dirs::home_dir().map(|home| home.join("Desktop")))
                .ok_or_else(|| ScaffoldError::Validation("could not locate a desktop directory".to_string())),
            Self::Explicit(path) => Ok(expand_home(path)),
        }
    }

    /// Full path of the project named `name` under this location
    pub fn project_root(&self, name: &str) -> Result<PathBuf, ScaffoldError> {
        let name = validate_project_name(name)?;
        let root = self.base_dir()?.join(name);
        debug!(?root, "RootLocation::project_root: resolved");
        Ok(root)
    }
}

fn expand_home(path: &std::path::Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir().map(|home| home.join(rest)).unwrap_or_else(|| path.to_path_buf()),
        Err(_) => path.to_path_buf(),
    }
}
