// src/core/source_collector.rs
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::ScanConfig;
use crate::error::{NavScanError, Result};

/// Enumerates candidate navigation source files under a project root
pub struct SourceCollector {
    config: ScanConfig,
}

impl SourceCollector {
    pub fn new(config: &ScanConfig) -> Self {
        Self {
            config: config.clone(),
        }
    }

    /// Recursively collect all source files under `root`, sorted lexically.
    ///
    /// Sorting makes downstream last-match-wins resolution deterministic
    /// rather than dependent on directory enumeration order.
    pub fn collect<P: AsRef<Path>>(&self, root: P) -> Result<Vec<PathBuf>> {
        let root = root.as_ref();
        let mut files = Vec::new();

        let walker = WalkBuilder::new(root)
            .hidden(false)
            .git_ignore(self.config.respect_gitignore)
            .filter_entry({
                let excluded = self.config.exclude_dirs.clone();
                // depth 0 is the root itself, which must never be pruned
                move |entry| {
                    let name = entry.file_name().to_string_lossy();
                    entry.depth() == 0 || !excluded.iter().any(|dir| dir.as_str() == name)
                }
            })
            .build();

        for entry in walker {
            let entry = entry.map_err(|e| NavScanError::FileSystem(e.to_string()))?;
            let path = entry.path();

            if path.is_file() && self.has_source_extension(path) {
                files.push(path.to_path_buf());
            }
        }

        files.sort();
        Ok(files)
    }

    fn has_source_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| self.config.extensions.iter().any(|e| e == ext))
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_fs::prelude::*;

    fn collector() -> SourceCollector {
        SourceCollector::new(&ScanConfig::default())
    }

    #[test]
    fn collects_only_source_extensions() {
        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("App.tsx").write_str("").unwrap();
        tmp.child("util.ts").write_str("").unwrap();
        tmp.child("README.md").write_str("").unwrap();
        tmp.child("style.css").write_str("").unwrap();

        let files = collector().collect(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, vec!["App.tsx", "util.ts"]);
    }

    #[test]
    fn recurses_into_subdirectories() {
        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("screens/Login.tsx").write_str("").unwrap();
        tmp.child("screens/auth/Register.tsx").write_str("").unwrap();

        let files = collector().collect(tmp.path()).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn skips_excluded_directories() {
        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("App.tsx").write_str("").unwrap();
        tmp.child("node_modules/lib/index.ts").write_str("").unwrap();

        let files = collector().collect(tmp.path()).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("App.tsx"));
    }

    #[test]
    fn output_is_sorted() {
        let tmp = assert_fs::TempDir::new().unwrap();
        tmp.child("b.ts").write_str("").unwrap();
        tmp.child("a.ts").write_str("").unwrap();
        tmp.child("c.ts").write_str("").unwrap();

        let files = collector().collect(tmp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.ts", "b.ts", "c.ts"]);
    }
}
