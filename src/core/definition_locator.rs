// src/core/definition_locator.rs
use std::collections::BTreeMap;
use std::path::PathBuf;

use regex::Regex;
use tracing::debug;

use crate::error::{NavScanError, Result};

/// Resolves component identifiers to the files that export them
pub struct DefinitionLocator;

impl DefinitionLocator {
    pub fn new() -> Self {
        Self
    }

    /// Build the recognition pattern for one component's exported declaration.
    ///
    /// Matches `export const Name` and `export function Name`, optionally
    /// followed by a type annotation such as `: React.FC<Props>`.
    fn definition_regex(component: &str) -> Result<Regex> {
        let pattern = format!(
            r"export\s+(?:const|function)\s+{}\b\s*(?::\s*[A-Za-z0-9_.]+(?:<[^>]*>)?)?",
            regex::escape(component)
        );
        Ok(Regex::new(&pattern)?)
    }

    /// Determine the defining file for each component.
    ///
    /// Every file is scanned for every component; when several files export
    /// the same identifier, the last file in iteration order wins. Components
    /// with no located definition are simply absent from the result.
    pub async fn locate(
        &self,
        files: &[PathBuf],
        components: &[String],
    ) -> Result<BTreeMap<String, PathBuf>> {
        let mut patterns = Vec::with_capacity(components.len());
        for component in components {
            patterns.push((component.clone(), Self::definition_regex(component)?));
        }

        let mut component_to_file = BTreeMap::new();

        for file in files {
            let content = tokio::fs::read_to_string(file)
                .await
                .map_err(|e| NavScanError::io(file, e))?;

            for (component, pattern) in &patterns {
                if pattern.is_match(&content) {
                    debug!("{}: defines {}", file.display(), component);
                    component_to_file.insert(component.clone(), file.clone());
                }
            }
        }

        Ok(component_to_file)
    }
}

impl Default for DefinitionLocator {
    fn default() -> Self {
        Self::new()
    }
}
