mod engine;
mod source_collector;

// Inference pipeline stages
mod definition_locator;
mod map_composer;
mod screen_registry;
mod transition_scanner;

// Graph construction and traversal
mod nav_graph;
mod report;

pub use definition_locator::DefinitionLocator;
pub use engine::{AnalysisResult, Engine, TraversalPath};
pub use map_composer::compose;
pub use nav_graph::NavigationGraph;
pub use report::{render_json, render_text};
pub use screen_registry::{ScreenRegistration, ScreenRegistry};
pub use source_collector::SourceCollector;
pub use transition_scanner::TransitionScanner;
