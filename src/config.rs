use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{NavScanError, Result};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Source scanning configuration
    pub scan: ScanConfig,

    /// Transition call-site recognition
    pub transitions: TransitionConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions treated as navigation sources
    pub extensions: Vec<String>,

    /// Directory names skipped during the walk
    pub exclude_dirs: Vec<String>,

    /// Whether .gitignore rules apply to the walk
    pub respect_gitignore: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    /// Function names that trigger a screen transition
    pub triggers: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["tsx".to_string(), "ts".to_string()],
            exclude_dirs: vec![
                "node_modules".to_string(),
                ".git".to_string(),
                "build".to_string(),
                "dist".to_string(),
            ],
            respect_gitignore: true,
        }
    }
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            triggers: vec!["navigate".to_string(), "replace".to_string()],
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, or fall back to defaults
    pub fn load_or_default(config_path: Option<&Path>) -> Result<Self> {
        match config_path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .map_err(|e| NavScanError::io(path, e))?;
                toml::from_str(&content)
                    .map_err(|e| NavScanError::Config(format!("{}: {}", path.display(), e)))
            }
            None => Ok(Self::default()),
        }
    }
}
