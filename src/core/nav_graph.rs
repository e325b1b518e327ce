// src/core/nav_graph.rs
use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Directed, possibly cyclic multigraph of screen transitions.
///
/// Nodes are canonical file paths; destination lists keep duplicates in
/// call-site order. Keys exist only for files that perform a transition,
/// so pure destinations never show up as root candidates.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NavigationGraph {
    adjacency: BTreeMap<PathBuf, Vec<PathBuf>>,
}

impl NavigationGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `from` exists as a source node, without adding an edge
    pub fn record_source(&mut self, from: &Path) {
        self.adjacency.entry(from.to_path_buf()).or_default();
    }

    /// Append a transition edge, keeping duplicates
    pub fn add_edge(&mut self, from: &Path, to: &Path) {
        self.adjacency
            .entry(from.to_path_buf())
            .or_default()
            .push(to.to_path_buf());
    }

    pub fn adjacency(&self) -> &BTreeMap<PathBuf, Vec<PathBuf>> {
        &self.adjacency
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Nodes that never appear as a transition destination.
    ///
    /// `roots = keys(graph) − flatten(values(graph))`; an empty result means
    /// every node has an incoming edge (e.g. a pure cycle) and is valid.
    pub fn roots(&self) -> Vec<PathBuf> {
        let destinations: HashSet<&PathBuf> = self.adjacency.values().flatten().collect();

        self.adjacency
            .keys()
            .filter(|source| !destinations.contains(source))
            .cloned()
            .collect()
    }

    /// Longest traversal path reachable from `root` via a single depth-first
    /// walk.
    ///
    /// The visited set is shared across the whole walk, so every node is
    /// expanded at most once per root and the search terminates on cycles.
    /// This is a greedy single-pass expansion, not an enumeration of all
    /// simple paths; sibling branches cannot revisit each other's nodes.
    pub fn longest_path_from(&self, root: &Path) -> Vec<PathBuf> {
        let mut visited = HashSet::new();
        let mut best = Vec::new();
        self.walk(root, &mut visited, Vec::new(), &mut best);
        best
    }

    fn walk(
        &self,
        node: &Path,
        visited: &mut HashSet<PathBuf>,
        mut path: Vec<PathBuf>,
        best: &mut Vec<PathBuf>,
    ) {
        visited.insert(node.to_path_buf());
        path.push(node.to_path_buf());

        if let Some(neighbours) = self.adjacency.get(node) {
            for next in neighbours {
                if !visited.contains(next) {
                    // each branch extends its own copy of the path
                    self.walk(next, visited, path.clone(), best);
                }
            }
        }

        if path.len() > best.len() {
            *best = path;
        }
    }
}
