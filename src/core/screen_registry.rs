// src/core/screen_registry.rs
use std::collections::BTreeMap;
use std::path::PathBuf;

use regex::Regex;
use tracing::debug;

use crate::error::{NavScanError, Result};

/// A single declarative screen registration found in source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenRegistration {
    /// Name used at transition call-sites
    pub navigation_name: String,
    /// Identifier of the component implementing the screen
    pub component_name: String,
}

/// Scans file contents for `<Stack.Screen name=".." component={..}/>`
/// registrations, producing the NavigationName -> ComponentName mapping
pub struct ScreenRegistry {
    registration_regex: Regex,
}

impl ScreenRegistry {
    pub fn new() -> Result<Self> {
        // Attribute order is fixed: name, optional options, component.
        // `\s` spans newlines, so registrations broken across lines still
        // match as long as the attribute order holds. The options value is
        // either a JSX object literal (`{{ ... }}`) or a plain expression
        // with no nested braces.
        Ok(Self {
            registration_regex: Regex::new(
                r#"Stack\.Screen\s+name="([A-Za-z0-9_]+)"\s+(?:options=\{(?:\{[^}]*\}|[^{}]*)\}\s+)?component=\{([A-Za-z0-9_]+)\}"#,
            )?,
        })
    }

    /// Extract all registrations from one file's text, in order of appearance
    pub fn extract(&self, content: &str) -> Vec<ScreenRegistration> {
        self.registration_regex
            .captures_iter(content)
            .map(|cap| ScreenRegistration {
                navigation_name: cap[1].to_string(),
                component_name: cap[2].to_string(),
            })
            .collect()
    }

    /// Scan all files, folding registrations into a single map.
    ///
    /// A navigation name registered more than once keeps the last
    /// registration seen (last write wins, not a merge).
    pub async fn scan(&self, files: &[PathBuf]) -> Result<BTreeMap<String, String>> {
        let mut nav_to_component = BTreeMap::new();

        for file in files {
            let content = tokio::fs::read_to_string(file)
                .await
                .map_err(|e| NavScanError::io(file, e))?;

            for registration in self.extract(&content) {
                debug!(
                    "{}: screen '{}' -> {}",
                    file.display(),
                    registration.navigation_name,
                    registration.component_name
                );
                nav_to_component
                    .insert(registration.navigation_name, registration.component_name);
            }
        }

        Ok(nav_to_component)
    }
}
