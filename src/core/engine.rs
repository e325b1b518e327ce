// src/core/engine.rs
use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::error::Result;

use super::definition_locator::DefinitionLocator;
use super::map_composer;
use super::nav_graph::NavigationGraph;
use super::report;
use super::screen_registry::ScreenRegistry;
use super::source_collector::SourceCollector;
use super::transition_scanner::TransitionScanner;

/// Complete output of one analysis run
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// NavigationName -> ComponentName, from screen registrations
    pub nav_to_component: BTreeMap<String, String>,
    /// ComponentName -> defining file, from export declarations
    pub component_to_file: BTreeMap<String, PathBuf>,
    /// NavigationName -> defining file, the composed mapping
    pub nav_to_file: BTreeMap<String, PathBuf>,
    /// File-to-file transition adjacency
    pub graph: NavigationGraph,
    /// Nodes never appearing as a transition destination
    pub roots: Vec<PathBuf>,
    /// Longest traversal path from each root
    pub longest_paths: Vec<TraversalPath>,
}

/// One depth-first traversal result
#[derive(Debug, Clone, Serialize)]
pub struct TraversalPath {
    pub root: PathBuf,
    pub nodes: Vec<PathBuf>,
}

/// Orchestrates the inference pipeline: collect sources, extract screen
/// registrations, locate definitions, compose the maps, scan transitions,
/// then infer roots and longest paths
pub struct Engine {
    collector: SourceCollector,
    registry: ScreenRegistry,
    locator: DefinitionLocator,
    scanner: TransitionScanner,
}

impl Engine {
    pub fn new(config_path: Option<&Path>) -> Result<Self> {
        let config = Config::load_or_default(config_path)?;
        debug!("Loaded configuration: {:?}", config);

        Ok(Self {
            collector: SourceCollector::new(&config.scan),
            registry: ScreenRegistry::new()?,
            locator: DefinitionLocator::new(),
            scanner: TransitionScanner::new(&config.transitions)?,
        })
    }

    /// Run the full analysis and print the report to stdout
    pub async fn analyze(&self, directory: &Path, format: OutputFormat) -> anyhow::Result<()> {
        let result = self.run(directory).await?;

        let output = match format {
            OutputFormat::Text => report::render_text(&result),
            OutputFormat::Json => report::render_json(&result)?,
        };
        println!("{}", output);

        Ok(())
    }

    /// Run the pipeline and return the structured result.
    ///
    /// Each stage owns the map it produces and hands it to the next one;
    /// file reads are the only suspension points.
    pub async fn run(&self, directory: &Path) -> Result<AnalysisResult> {
        info!("🔍 Analyzing navigation structure of {}", directory.display());

        let files = self.collector.collect(directory)?;
        info!("Collected {} source files", files.len());

        let nav_to_component = self.registry.scan(&files).await?;
        debug!("Found {} screen registrations", nav_to_component.len());

        let components: Vec<String> = nav_to_component
            .values()
            .cloned()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        let component_to_file = self.locator.locate(&files, &components).await?;
        debug!("Located {} component definitions", component_to_file.len());

        let nav_to_file = map_composer::compose(&nav_to_component, &component_to_file);
        info!("Resolved {} navigation targets", nav_to_file.len());

        let graph = self.scanner.scan(&files, &nav_to_file).await?;

        let roots = graph.roots();
        let longest_paths = roots
            .iter()
            .map(|root| TraversalPath {
                root: root.clone(),
                nodes: graph.longest_path_from(root),
            })
            .collect();

        Ok(AnalysisResult {
            nav_to_component,
            component_to_file,
            nav_to_file,
            graph,
            roots,
            longest_paths,
        })
    }
}
