//! Project manifest (hexmap.yaml) parsing.
//!
//! The manifest sets project-wide defaults for rendering: where maps live,
//! where SVGs go, which theme to prepend and the viewport size.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{HexMapError, Result};
use crate::render::Viewport;
use crate::theme::{Theme, DEFAULT_THEME};

/// Project manifest loaded from hexmap.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories to scan for maps. Defaults to the project root.
    pub sources: Vec<String>,

    /// Output directory for rendered SVGs.
    pub output: PathBuf,

    /// Theme prepended to maps that do not pick their own.
    pub theme: String,

    /// Viewport width.
    pub width: f64,

    /// Viewport height.
    pub height: f64,

    /// Patterns to exclude from discovery.
    pub excludes: Vec<String>,
}

impl Default for Manifest {
    fn default() -> Self {
        let viewport = Viewport::default();
        Self {
            sources: vec![],
            output: PathBuf::from("dist"),
            theme: DEFAULT_THEME.to_string(),
            width: viewport.width,
            height: viewport.height,
            excludes: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a hexmap.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| HexMapError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let manifest: Manifest = serde_yaml::from_str(content).map_err(|e| HexMapError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check hexmap.yaml syntax".to_string()),
        })?;

        if !(manifest.width > 0.0 && manifest.height > 0.0) {
            return Err(HexMapError::Parse {
                message: format!(
                    "Invalid viewport {}x{}",
                    manifest.width, manifest.height
                ),
                help: Some("width and height must be positive".to_string()),
            });
        }

        Ok(manifest)
    }

    /// Check if a path should be excluded based on exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path_str = path.to_string_lossy();
        self.excludes
            .iter()
            .any(|pattern| matches_pattern(&path_str, pattern))
    }

    /// Get effective source paths, defaulting to current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    pub fn default_theme(&self) -> Theme {
        Theme::resolve(&self.theme)
    }
}

/// Simple glob matching: `*.ext`, `dir/*`, `**/dir/*`, or a substring.
fn matches_pattern(path: &str, pattern: &str) -> bool {
    if let Some(suffix) = pattern.strip_prefix("**/") {
        if let Some(dir) = suffix.strip_suffix("/*") {
            return path.starts_with(&format!("{}/", dir))
                || path.contains(&format!("/{}/", dir));
        }
        return path.contains(suffix);
    }

    if let Some(suffix) = pattern.strip_prefix('*') {
        if !pattern.contains('/') {
            return path.ends_with(suffix);
        }
    }

    if let Some(prefix) = pattern.strip_suffix("/*") {
        return path.starts_with(&format!("{}/", prefix))
            || path.contains(&format!("/{}/", prefix));
    }

    path.contains(pattern)
}
