//! Template definitions and loading
//!
//! Templates are read from JSON files, each holding an array of
//! `{ "name": ..., "folders": [...] }` records. Sources are searched in
//! order and the first definition of a name wins; later duplicates are
//! dropped. When nothing loads, the builtin set is used instead.
//!
//! ```json
//! [
//!   { "name": "Web", "folders": ["src", "assets/css", "assets/js", "docs"] }
//! ]
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::ScaffoldError;

/// A named list of relative folder paths
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    /// Name used for selection and de-duplication
    #[serde(default)]
    pub name: String,

    /// Relative folder paths, used literally
    #[serde(default)]
    pub folders: Vec<String>,
}

impl Template {
    pub fn new(name: impl Into<String>, folders: &[&str]) -> Self {
        Self {
            name: name.into(),
            folders: folders.iter().map(|f| f.to_string()).collect(),
        }
    }
}

/// Templates compiled into the binary
pub fn builtin_templates() -> Vec<Template> {
    vec![
        Template::new("Web", &["src", "assets/css", "assets/js", "assets/images", "docs"]),
        Template::new(
            "Python Data Analysis",
            &["data/raw", "data/processed", "notebooks", "src", "reports/figures"],
        ),
        Template::new("Rust CLI", &["src", "tests", "benches", "docs"]),
    ]
}

/// The merged set of templates available for selection
#[derive(Debug)]
pub struct TemplateStore {
    templates: Vec<Template>,
    skipped: Vec<ScaffoldError>,
    from_builtin: bool,
}

impl TemplateStore {
    /// Load templates from the given sources in order
    ///
    /// Missing sources are ignored. Sources that cannot be read or parsed are
    /// recorded in [`TemplateStore::skipped`] and loading continues.
    pub fn load<P: AsRef<Path>>(sources: &[P]) -> Self {
        debug!(source_count = sources.len(), "TemplateStore::load: called");
        let mut templates: Vec<Template> = Vec::new();
        let mut skipped = Vec::new();

        for source in sources {
            let path = source.as_ref();
            if !path.exists() {
                debug!(?path, "load: source does not exist, skipping");
                continue;
            }

            match Self::load_source(path) {
                Ok(parsed) => {
                    debug!(?path, count = parsed.len(), "load: parsed source");
                    for template in parsed {
                        if templates.iter().any(|t| t.name == template.name) {
                            debug!(?path, name = %template.name, "load: duplicate template dropped");
                            continue;
                        }
                        templates.push(template);
                    }
                }
                Err(e) => {
                    warn!(?path, error = %e, "Failed to load template source");
                    skipped.push(e);
                }
            }
        }

        let from_builtin = templates.is_empty();
        if from_builtin {
            info!("No templates loaded from sources, using builtin templates");
            templates = builtin_templates();
        } else {
            info!(count = templates.len(), "Loaded templates");
        }

        Self {
            templates,
            skipped,
            from_builtin,
        }
    }

    fn load_source(path: &Path) -> Result<Vec<Template>, ScaffoldError> {
        let content = fs::read_to_string(path).map_err(|e| ScaffoldError::TemplateSource {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ScaffoldError::TemplateSource {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// All templates in load order
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Look up a template by exact name
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Look up a template by its zero-based position in load order
    pub fn by_index(&self, index: usize) -> Option<&Template> {
        self.templates.get(index)
    }

    /// Sources that existed but could not be used
    pub fn skipped(&self) -> &[ScaffoldError] {
        &self.skipped
    }

    /// Whether the builtin fallback is in use
    pub fn is_builtin(&self) -> bool {
        self.from_builtin
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

/// Write the builtin templates to `path` so they can be edited
///
/// Refuses to touch an existing file unless `force` is set. Returns whether
/// a file was written.
pub fn write_builtin_templates(path: &Path, force: bool) -> Result<bool, ScaffoldError> {
    if path.exists() && !force {
        debug!(?path, "write_builtin_templates: file exists, leaving it alone");
        return Ok(false);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ScaffoldError::io(parent, e))?;
    }

    let content = serde_json::to_string_pretty(&builtin_templates())
        .map_err(|e| ScaffoldError::io(path, std::io::Error::other(e)))?;
    fs::write(path, content).map_err(|e| ScaffoldError::io(path, e))?;

    info!(?path, "Wrote builtin templates");
    Ok(true)
}

/// Default per-user template file, matching the default search path
pub fn user_templates_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("quickprep").join("templates.json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_first_source_wins_on_duplicate_name() {
        let temp = TempDir::new().unwrap();
        let a = write(&temp, "a.json", r#"[{"name":"Web","folders":["from-a"]}]"#);
        let b = write(
            &temp,
            "b.json",
            r#"[{"name":"Web","folders":["from-b"]},{"name":"Api","folders":["handlers"]}]"#,
        );

        let store = TemplateStore::load(&[a, b]);

        let webs: Vec<_> = store.templates().iter().filter(|t| t.name == "Web").collect();
        assert_eq!(webs.len(), 1);
        assert_eq!(webs[0].folders, vec!["from-a"]);
        assert_eq!(store.get("Api").unwrap().folders, vec!["handlers"]);
        assert!(!store.is_builtin());
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let temp = TempDir::new().unwrap();
        let a = write(&temp, "a.json", r#"[{"name":"web","folders":[]},{"name":"Web","folders":[]}]"#);

        let store = TemplateStore::load(&[a]);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_malformed_source_is_skipped() {
        let temp = TempDir::new().unwrap();
        let bad = write(&temp, "bad.json", "{ not json");
        let good = write(&temp, "good.json", r#"[{"name":"Docs","folders":["guide"]}]"#);

        let store = TemplateStore::load(&[bad.clone(), good]);

        assert_eq!(store.len(), 1);
        assert_eq!(store.templates()[0].name, "Docs");
        assert_eq!(store.skipped().len(), 1);
        assert_eq!(store.skipped()[0].path(), Some(&bad));
    }

    #[test]
    fn test_missing_fields_default() {
        let temp = TempDir::new().unwrap();
        let src = write(&temp, "t.json", r#"[{"name":"Bare"},{"folders":["x"]}]"#);

        let store = TemplateStore::load(&[src]);

        assert_eq!(store.get("Bare").unwrap().folders, Vec::<String>::new());
        assert_eq!(store.get("").unwrap().folders, vec!["x"]);
    }

    #[test]
    fn test_fallback_when_nothing_loads() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.json");
        let bad = write(&temp, "bad.json", "[1, 2, 3]");
        let empty = write(&temp, "empty.json", "[]");

        let none: [PathBuf; 0] = [];
        let first = TemplateStore::load(&none);
        let second = TemplateStore::load(&[missing, bad, empty]);

        assert!(first.is_builtin());
        assert!(!first.is_empty());
        assert_eq!(first.templates(), second.templates());
        assert_eq!(first.templates(), builtin_templates().as_slice());
    }

    #[test]
    fn test_load_does_not_modify_sources() {
        let temp = TempDir::new().unwrap();
        let content = r#"[{"name":"Web","folders":["src"]}]"#;
        let src = write(&temp, "t.json", content);

        let _ = TemplateStore::load(&[src.clone()]);
        assert_eq!(fs::read_to_string(&src).unwrap(), content);
    }

    #[test]
    fn test_by_index() {
        let store = TemplateStore::load::<PathBuf>(&[]);
        assert_eq!(store.by_index(0).unwrap().name, "Web");
        assert!(store.by_index(store.len()).is_none());
    }

    #[test]
    fn test_write_builtin_templates() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join("templates.json");

        assert!(write_builtin_templates(&path, false).unwrap());
        assert!(!write_builtin_templates(&path, false).unwrap());

        let store = TemplateStore::load(&[path.clone()]);
        assert!(!store.is_builtin());
        assert_eq!(store.templates(), builtin_templates().as_slice());

        fs::write(&path, "[]").unwrap();
        assert!(write_builtin_templates(&path, true).unwrap());
        assert_eq!(TemplateStore::load(&[path]).len(), builtin_templates().len());
    }
}
