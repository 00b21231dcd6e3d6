//! QuickPrep - project skeleton generator
//!
//! Creates a project's folder layout from a template, adds any extra folders
//! the user asks for, and writes a README describing the result.
//!
//! # Pipeline
//!
//! ```text
//! template sources ──► TemplateStore ──► selected Template
//!                                            │
//! extra expressions ──► expand ──────────────┤
//!                                            ▼
//!                                        FolderSet (trimmed, unique, sorted)
//!                                            │
//!                                            ▼
//!                              Materializer ──► <root>/<folder>/.gitkeep
//!                                            │
//!                                            ▼
//!                              ProjectManifest ──► <root>/README.md
//! ```
//!
//! # Example
//!
//! ```ignore
//! use quickprep::{Materializer, NullSink, ProjectPlan, TemplateStore, create_project};
//!
//! let store = TemplateStore::load(&["templates.json"]);
//! let plan = ProjectPlan::new("work/site".into(), store.get("Web"), &["assets/{fonts,icons}"]);
//! create_project(&plan, &Materializer::default(), &mut NullSink)?;
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod expand;
pub mod folders;
pub mod location;
pub mod manifest;
pub mod materialize;
pub mod output;
pub mod project;
pub mod template;
pub mod wizard;

pub use config::{Config, TemplatesConfig};
pub use error::{ScaffoldError, validate_project_name};
pub use expand::expand;
pub use folders::FolderSet;
pub use location::RootLocation;
pub use manifest::{MANIFEST_FILE, ProjectManifest, generate};
pub use materialize::{DEFAULT_MARKER_FILE, MaterializationResult, Materializer, NullSink, ProgressSink};
pub use project::{CUSTOM_TEMPLATE_NAME, ProjectOutcome, ProjectPlan, create_project};
pub use template::{Template, TemplateStore, builtin_templates, write_builtin_templates};
pub use wizard::{Answers, LineSource, ReadlineSource, ScriptedLines, Wizard};
