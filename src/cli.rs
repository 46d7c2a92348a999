use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "scenario-inventory")]
#[command(about = "Build dropdown and inventory JSON from test scenario trees", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./Inventory.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the configured output directory
    #[arg(long, global = true)]
    pub output_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scan all sources and write dropdown, inventory and summary files
    Generate,
    /// Print the display label derived for each scenario identifier
    Labels {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Remove stale output files only
    Clean,
    /// Print configuration values as TOML
    PrintConfig,
}
