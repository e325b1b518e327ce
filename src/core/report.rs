// src/core/report.rs
use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::error::Result;

use super::engine::AnalysisResult;

/// Display identity of a node: the file's base name.
///
/// Graph nodes stay keyed by full path internally; base names are a
/// rendering concern and same-named files in different directories are
/// allowed to collide here.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Render the human-readable report
pub fn render_text(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Resolved navigation targets: {}\n",
        result.nav_to_file.len()
    ));

    out.push_str("\nNavigation graph:\n");
    if result.graph.is_empty() {
        out.push_str("  (no transitions found)\n");
    } else {
        for (source, targets) in result.graph.adjacency() {
            let rendered: Vec<String> = targets.iter().map(|t| display_name(t)).collect();
            out.push_str(&format!(
                "  {} -> [{}]\n",
                display_name(source),
                rendered.join(", ")
            ));
        }
    }

    for traversal in &result.longest_paths {
        let rendered: Vec<String> = traversal.nodes.iter().map(|n| display_name(n)).collect();
        out.push_str(&format!(
            "\nLongest path from {}:\n  {}\n",
            display_name(&traversal.root),
            rendered.join(" -> ")
        ));
    }

    out
}

#[derive(Serialize)]
struct JsonReport {
    resolved_targets: usize,
    navigation_map: BTreeMap<String, String>,
    graph: BTreeMap<String, Vec<String>>,
    roots: Vec<String>,
    longest_paths: Vec<JsonTraversal>,
}

#[derive(Serialize)]
struct JsonTraversal {
    root: String,
    path: Vec<String>,
}

/// Render the machine-readable report
pub fn render_json(result: &AnalysisResult) -> Result<String> {
    let mut graph: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for (source, targets) in result.graph.adjacency() {
        graph
            .entry(display_name(source))
            .or_default()
            .extend(targets.iter().map(|t| display_name(t)));
    }

    let report = JsonReport {
        resolved_targets: result.nav_to_file.len(),
        navigation_map: result
            .nav_to_file
            .iter()
            .map(|(name, file)| (name.clone(), display_name(file)))
            .collect(),
        graph,
        roots: result.roots.iter().map(|r| display_name(r)).collect(),
        longest_paths: result
            .longest_paths
            .iter()
            .map(|t| JsonTraversal {
                root: display_name(&t.root),
                path: t.nodes.iter().map(|n| display_name(n)).collect(),
            })
            .collect(),
    };

    Ok(serde_json::to_string_pretty(&report)?)
}
