//! QuickPrep configuration types and loading

use std::fs;
use std::path::{Path, PathBuf};

use eyre::{Context, Result, eyre};
use serde::{Deserialize, Serialize};

use crate::error::is_single_name;
use crate::materialize::DEFAULT_MARKER_FILE;

/// Main QuickPrep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Template source configuration
    pub templates: TemplatesConfig,

    /// Marker file placed in every created folder
    #[serde(rename = "marker-file")]
    pub marker_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            templates: TemplatesConfig::default(),
            marker_file: DEFAULT_MARKER_FILE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Project-local config: ./quickprep.yml
        let local_config = PathBuf::from("quickprep.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // User config: ~/.config/quickprep/quickprep.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("quickprep").join("quickprep.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;
        let marker = config.marker_file.as_str();
        if marker.trim() != marker || !is_single_name(marker) {
            return Err(eyre!("marker-file must be a single file name: {:?}", marker));
        }

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Where template definitions are read from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// JSON files to read, in priority order (first definition of a name wins)
    pub paths: Vec<String>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self {
            paths: vec![
                "quickprep.json".to_string(),
                "~/.config/quickprep/templates.json".to_string(),
            ],
        }
    }
}

impl TemplatesConfig {
    /// Expand paths (resolve ~/ and relative paths)
    pub fn expanded_paths(&self) -> Vec<PathBuf> {
        self.paths
            .iter()
            .filter_map(|p| {
                if let Some(rest) = p.strip_prefix("~/") {
                    dirs::home_dir().map(|home| home.join(rest))
                } else {
                    Some(PathBuf::from(p))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.marker_file, ".gitkeep");
        assert_eq!(config.templates.paths.len(), 2);
        assert_eq!(config.templates.paths[0], "quickprep.json");
    }

    #[test]
    fn test_load_explicit_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("qp.yml");
        fs::write(
            &path,
            "templates:\n  paths:\n    - /srv/templates.json\nmarker-file: .keep\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.marker_file, ".keep");
        assert_eq!(config.templates.expanded_paths(), vec![PathBuf::from("/srv/templates.json")]);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("qp.yml");
        fs::write(&path, "marker-file: .keep\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.marker_file, ".keep");
        assert_eq!(config.templates.paths, TemplatesConfig::default().paths);
    }

    #[test]
    fn test_explicit_file_must_parse() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("qp.yml");
        fs::write(&path, "templates: [unclosed").unwrap();

        assert!(Config::load(Some(&path)).is_err());
        assert!(Config::load(Some(&temp.path().join("missing.yml"))).is_err());
    }

    #[test]
    fn test_marker_file_must_be_single_name() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("qp.yml");

        for bad in ["\"\"", "../escape", "sub/.keep", "/tmp/.keep", "..", "\" .keep\""] {
            fs::write(&path, format!("marker-file: {}\n", bad)).unwrap();
            let err = Config::load(Some(&path)).unwrap_err();
            assert!(format!("{:#}", err).contains("marker-file"), "{bad} should be rejected");
        }
    }

    #[test]
    fn test_expanded_paths_resolves_home() {
        let config = TemplatesConfig {
            paths: vec!["~/t.json".to_string(), "local.json".to_string()],
        };

        let paths = config.expanded_paths();
        assert_eq!(paths.last(), Some(&PathBuf::from("local.json")));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(paths[0], home.join("t.json"));
        }
    }
}
