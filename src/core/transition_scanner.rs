// src/core/transition_scanner.rs
use std::collections::BTreeMap;
use std::path::PathBuf;

use regex::Regex;
use tracing::debug;

use crate::config::TransitionConfig;
use crate::error::{NavScanError, Result};

use super::nav_graph::NavigationGraph;

/// Scans file contents for transition call-sites and builds the
/// file-to-file adjacency structure
pub struct TransitionScanner {
    call_site_regex: Regex,
}

impl TransitionScanner {
    pub fn new(config: &TransitionConfig) -> Result<Self> {
        let triggers = config
            .triggers
            .iter()
            .map(|t| regex::escape(t))
            .collect::<Vec<_>>()
            .join("|");

        // Sole argument must be a quoted identifier-safe string; computed or
        // variable targets are not recognized.
        let pattern = format!(
            r#"\b(?:{triggers})\(\s*(?:'([A-Za-z0-9_]+)'|"([A-Za-z0-9_]+)")\s*\)"#
        );

        Ok(Self {
            call_site_regex: Regex::new(&pattern)?,
        })
    }

    /// Extract the navigation names of all call-sites in one file's text,
    /// in order of appearance
    pub fn call_sites(&self, content: &str) -> Vec<String> {
        self.call_site_regex
            .captures_iter(content)
            .filter_map(|cap| cap.get(1).or_else(|| cap.get(2)))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    /// Scan all files and build the navigation graph.
    ///
    /// A file becomes a graph node once it performs any transition; only
    /// call-sites whose name resolves through the composed map contribute
    /// edges. Duplicate targets are kept in call-site order.
    pub async fn scan(
        &self,
        files: &[PathBuf],
        nav_to_file: &BTreeMap<String, PathBuf>,
    ) -> Result<NavigationGraph> {
        let mut graph = NavigationGraph::new();

        for file in files {
            let content = tokio::fs::read_to_string(file)
                .await
                .map_err(|e| NavScanError::io(file, e))?;

            for nav_name in self.call_sites(&content) {
                graph.record_source(file);
                match nav_to_file.get(&nav_name) {
                    Some(target) => {
                        debug!(
                            "{} -> {} (via '{}')",
                            file.display(),
                            target.display(),
                            nav_name
                        );
                        graph.add_edge(file, target);
                    }
                    None => {
                        debug!(
                            "{}: transition to unregistered '{}' ignored",
                            file.display(),
                            nav_name
                        );
                    }
                }
            }
        }

        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> TransitionScanner {
        TransitionScanner::new(&TransitionConfig::default()).unwrap()
    }

    #[test]
    fn extracts_navigate_and_replace_calls() {
        let content = r#"
            navigation.navigate('Home');
            navigation.replace('Login');
        "#;
        assert_eq!(scanner().call_sites(content), vec!["Home", "Login"]);
    }

    #[test]
    fn accepts_double_quoted_targets() {
        let content = r#"navigate("Settings")"#;
        assert_eq!(scanner().call_sites(content), vec!["Settings"]);
    }

    #[test]
    fn keeps_duplicates_in_call_site_order() {
        let content = "navigate('A'); navigate('B'); navigate('A');";
        assert_eq!(scanner().call_sites(content), vec!["A", "B", "A"]);
    }

    #[test]
    fn rejects_non_literal_targets() {
        let content = r#"
            navigate(screenName);
            navigate('has space');
            navigate(`Template`);
        "#;
        assert!(scanner().call_sites(content).is_empty());
    }

    #[test]
    fn rejects_partial_function_names() {
        // `renavigate` must not count as a trigger
        let content = "renavigate('Home')";
        assert!(scanner().call_sites(content).is_empty());
    }

    #[tokio::test]
    async fn unresolved_targets_contribute_no_edges() {
        use assert_fs::prelude::*;

        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("App.tsx")
            .write_str("navigate('Unknown');")
            .unwrap();
        let files = vec![tmp.path().join("App.tsx")];

        let graph = scanner()
            .scan(&files, &BTreeMap::new())
            .await
            .unwrap();

        let lists: Vec<_> = graph.adjacency().values().flatten().collect();
        assert!(lists.is_empty());
    }

    #[tokio::test]
    async fn edges_follow_composed_map() {
        use assert_fs::prelude::*;

        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("Login.tsx")
            .write_str("navigate('Home');")
            .unwrap();
        let login = tmp.path().join("Login.tsx");
        let home = tmp.path().join("Home.tsx");

        let mut nav_to_file = BTreeMap::new();
        nav_to_file.insert("Home".to_string(), home.clone());

        let graph = scanner().scan(&[login.clone()], &nav_to_file).await.unwrap();

        assert_eq!(graph.adjacency()[&login], vec![home]);
    }
}
