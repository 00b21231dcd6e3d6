//! README generation for a freshly created project

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use handlebars::Handlebars;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ScaffoldError;

/// File name of the generated manifest
pub const MANIFEST_FILE: &str = "README.md";

const MANIFEST_TEMPLATE: &str = r#"# {{project_name}}

> Generated by QuickPrep on {{created_at}}

## Template

{{template_name}}

## Structure

```text
{{#each folders}}{{this}}
{{/each}}```

---

Empty folders carry a marker file so they stay under version control.
Replace this README with a description of your project.
"#;

/// Everything the README describes
#[derive(Debug, Clone, Serialize)]
pub struct ProjectManifest {
    pub project_name: String,
    pub created_at: String,
    pub template_name: String,
    pub folders: Vec<String>,
}

impl ProjectManifest {
    /// Describe the project rooted at `root`, stamped with the current local time
    pub fn new(root: &Path, template_name: &str, folders: &[String]) -> Self {
        Self::at(root, template_name, folders, Local::now())
    }

    /// Same as [`ProjectManifest::new`] with an explicit timestamp
    pub fn at(root: &Path, template_name: &str, folders: &[String], created_at: DateTime<Local>) -> Self {
        let project_name = root
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| root.display().to_string());

        Self {
            project_name,
            created_at: created_at.format("%Y-%m-%d %H:%M:%S").to_string(),
            template_name: template_name.to_string(),
            folders: folders.to_vec(),
        }
    }

    /// Render the README text
    pub fn render(&self) -> Result<String, ScaffoldError> {
        let mut hbs = Handlebars::new();
        hbs.register_escape_fn(handlebars::no_escape);

        hbs.render_template(MANIFEST_TEMPLATE, self)
            .map_err(|e| ScaffoldError::Render(e.to_string()))
    }

    /// Render and write `README.md` under `root`, replacing any existing file
    pub fn write(&self, root: &Path) -> Result<PathBuf, ScaffoldError> {
        let content = self.render()?;
        let path = root.join(MANIFEST_FILE);
        debug!(?path, bytes = content.len(), "ProjectManifest::write: writing");

        fs::write(&path, content).map_err(|e| ScaffoldError::io(&path, e))?;
        info!(?path, "Wrote project manifest");
        Ok(path)
    }
}

/// Render the manifest for `root` without touching disk
pub fn generate(root: &Path, template_name: &str, folders: &[String]) -> Result<String, ScaffoldError> {
    ProjectManifest::new(root, template_name, folders).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::TempDir;

    fn fixed_time() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
    }

    fn structure_block(text: &str) -> Vec<&str> {
        let start = text.find("```text\n").unwrap() + "```text\n".len();
        let end = start + text[start..].find("```").unwrap();
        text[start..end].lines().collect()
    }

    #[test]
    fn test_render_lists_folders_and_template() {
        let folders = vec!["src".to_string(), "docs".to_string()];
        let manifest = ProjectManifest::at(Path::new("/tmp/MyApp"), "Demo", &folders, fixed_time());

        let text = manifest.render().unwrap();

        assert!(text.starts_with("# MyApp\n"));
        assert!(text.contains("2024-03-01 09:30:00"));
        assert!(text.contains("\nDemo\n"));
        assert_eq!(structure_block(&text), vec!["src", "docs"]);
    }

    #[test]
    fn test_section_order() {
        let folders = vec!["src".to_string()];
        let text = ProjectManifest::at(Path::new("P"), "Web", &folders, fixed_time())
            .render()
            .unwrap();

        let title = text.find("# P").unwrap();
        let stamp = text.find("Generated by").unwrap();
        let template = text.find("## Template").unwrap();
        let structure = text.find("## Structure").unwrap();
        let footer = text.find("---").unwrap();
        assert!(title < stamp && stamp < template && template < structure && structure < footer);
    }

    #[test]
    fn test_folders_are_verbatim() {
        let folders = vec!["assets/css".to_string(), "a&b/<x>".to_string()];
        let text = ProjectManifest::at(Path::new("P"), "Web", &folders, fixed_time())
            .render()
            .unwrap();

        assert_eq!(structure_block(&text), vec!["assets/css", "a&b/<x>"]);
    }

    #[test]
    fn test_empty_folder_list() {
        let text = ProjectManifest::at(Path::new("P"), "None", &[], fixed_time())
            .render()
            .unwrap();

        assert!(structure_block(&text).is_empty());
    }

    #[test]
    fn test_write_overwrites_existing_readme() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("Demo");
        fs::create_dir_all(&root).unwrap();
        fs::write(root.join(MANIFEST_FILE), "old content").unwrap();

        let path = ProjectManifest::new(&root, "Web", &["src".to_string()])
            .write(&root)
            .unwrap();

        let text = fs::read_to_string(path).unwrap();
        assert!(!text.contains("old content"));
        assert!(text.starts_with("# Demo\n"));
    }

    #[test]
    fn test_generate() {
        let text = generate(Path::new("/work/Site"), "Web", &["src".to_string()]).unwrap();
        assert!(text.contains("# Site"));
        assert!(text.contains("\nsrc\n"));
    }
}
