//! Folder set accumulation
//!
//! Collects the folders a project should get: the selected template's list
//! plus whatever the user typed. Entries are trimmed, blanks are dropped and
//! duplicates collapse on their literal text. Entries that would escape the
//! project root (absolute paths, `..`) are dropped. The result is sorted so
//! that output is stable between runs.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::is_contained_relative;
use crate::expand::{expand, has_brace_group};

/// Sorted, de-duplicated set of relative folder paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FolderSet {
    entries: BTreeSet<String>,
}

impl FolderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from a template's folders without brace expansion
    pub fn with_template<S: AsRef<str>>(folders: &[S]) -> Self {
        let mut set = Self::new();
        for folder in folders {
            set.insert(folder.as_ref());
        }
        set
    }

    /// Add one user-entered expression, expanding a brace group if present
    pub fn add_expression(&mut self, expr: &str) {
        let expr = expr.trim();
        if expr.is_empty() {
            return;
        }

        if has_brace_group(expr) {
            for path in expand(expr) {
                self.insert(&path);
            }
        } else {
            self.insert(expr);
        }
    }

    fn insert(&mut self, path: &str) {
        let path = path.trim();
        if path.is_empty() {
            debug!("FolderSet::insert: dropping blank entry");
            return;
        }
        if !is_contained_relative(path) {
            warn!(path, "Ignoring folder outside the project root");
            return;
        }
        self.entries.insert(path.to_string());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish accumulation, yielding folders in ascending code-point order
    pub fn into_sorted(self) -> Vec<String> {
        self.entries.into_iter().collect()
    }
}

/// Combine template folders and extra expressions into the final folder list
pub fn build<S: AsRef<str>, E: AsRef<str>>(template_folders: &[S], extra_expressions: &[E]) -> Vec<String> {
    let mut set = FolderSet::with_template(template_folders);
    for expr in extra_expressions {
        set.add_expression(expr.as_ref());
    }
    debug!(count = set.len(), "build: folder set complete");
    set.into_sorted()
}
