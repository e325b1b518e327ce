use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use anyhow::Result;

use crate::core::Engine;

#[derive(Parser)]
#[command(name = "navscan")]
#[command(about = "Reconstructs the screen navigation graph of a React Native project")]
#[command(version)]
pub struct Cli {
    /// Project directory to analyze (defaults to current directory)
    #[arg(short, long)]
    pub directory: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Report output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Machine-readable JSON
    Json,
}

impl Cli {
    pub async fn execute(self, engine: Engine) -> Result<()> {
        let directory = self.directory.unwrap_or_else(|| PathBuf::from("."));
        engine.analyze(&directory, self.format).await
    }
}
