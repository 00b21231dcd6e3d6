//! End-to-end project creation
//!
//! Ties the pieces together in the order they must run: build the folder
//! set, create the tree, then write the README.

use std::path::PathBuf;

use tracing::info;

use crate::error::ScaffoldError;
use crate::folders;
use crate::manifest::ProjectManifest;
use crate::materialize::{MaterializationResult, Materializer, ProgressSink};
use crate::template::Template;

/// Template name recorded when no template was chosen
pub const CUSTOM_TEMPLATE_NAME: &str = "Custom";

/// A fully resolved request to create a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPlan {
    /// Project directory
    pub root: PathBuf,
    /// Template name written to the README
    pub template_name: String,
    /// Sorted, de-duplicated folders relative to `root`
    pub folders: Vec<String>,
}

impl ProjectPlan {
    pub fn new<E: AsRef<str>>(root: PathBuf, template: Option<&Template>, extras: &[E]) -> Self {
        let (template_name, template_folders) = match template {
            Some(t) => (t.name.clone(), t.folders.as_slice()),
            None => (CUSTOM_TEMPLATE_NAME.to_string(), &[][..]),
        };

        Self {
            root,
            template_name,
            folders: folders::build(template_folders, extras),
        }
    }
}

/// What was written for a project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectOutcome {
    pub structure: MaterializationResult,
    pub manifest_path: PathBuf,
}

/// Create the directory tree for `plan` and write its README
pub fn create_project(
    plan: &ProjectPlan,
    materializer: &Materializer,
    sink: &mut dyn ProgressSink,
) -> Result<ProjectOutcome, ScaffoldError> {
    let structure = materializer.materialize(&plan.root, &plan.folders, sink)?;
    let manifest_path = ProjectManifest::new(&plan.root, &plan.template_name, &plan.folders).write(&plan.root)?;

    info!(root = ?plan.root, template = %plan.template_name, "Project created");
    Ok(ProjectOutcome {
        structure,
        manifest_path,
    })
}
