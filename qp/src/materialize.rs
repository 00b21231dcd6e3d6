//! Creating the project tree on disk

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{ScaffoldError, is_contained_relative};

/// Marker dropped into each created folder so empty directories are tracked by git
pub const DEFAULT_MARKER_FILE: &str = ".gitkeep";

/// Receives a notification for each folder as it is created
pub trait ProgressSink {
    fn folder_created(&mut self, relative: &str, path: &Path);
}

/// Sink that ignores all notifications
#[derive(Debug, Default)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn folder_created(&mut self, _relative: &str, _path: &Path) {}
}

/// What a successful run produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializationResult {
    /// Project root directory
    pub root: PathBuf,
    /// Absolute paths of created folders, in creation order
    pub created: Vec<PathBuf>,
}

/// Creates project directories under a root
#[derive(Debug, Clone)]
pub struct Materializer {
    marker_file: String,
}

impl Default for Materializer {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_FILE)
    }
}

impl Materializer {
    pub fn new(marker_file: impl Into<String>) -> Self {
        Self {
            marker_file: marker_file.into(),
        }
    }

    /// Create `root` and every folder beneath it, stopping at the first failure
    ///
    /// Folders must be relative paths that stay beneath `root`; anything else
    /// is rejected before the filesystem is touched. Folders created before a
    /// failure are left in place.
    pub fn materialize<S: AsRef<str>>(
        &self,
        root: &Path,
        folders: &[S],
        sink: &mut dyn ProgressSink,
    ) -> Result<MaterializationResult, ScaffoldError> {
        debug!(?root, folder_count = folders.len(), "Materializer::materialize: called");
        if let Some(bad) = folders.iter().map(|f| f.as_ref()).find(|f| !is_contained_relative(f)) {
            return Err(ScaffoldError::Validation(format!(
                "folder must be a relative path inside the project: {}",
                bad
            )));
        }

        fs::create_dir_all(root).map_err(|e| ScaffoldError::io(root, e))?;

        let mut created = Vec::with_capacity(folders.len());
        for folder in folders {
            let relative = folder.as_ref();
            let path = root.join(relative);

            fs::create_dir_all(&path).map_err(|e| ScaffoldError::io(&path, e))?;

            let marker = path.join(&self.marker_file);
            // Leave an existing marker's content alone
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(&marker)
                .map_err(|e| ScaffoldError::io(&marker, e))?;

            debug!(?path, "materialize: folder created");
            sink.folder_created(relative, &path);
            created.push(path);
        }

        info!(?root, count = created.len(), "Project structure created");
        Ok(MaterializationResult {
            root: root.to_path_buf(),
            created,
        })
    }
}
