mod cli;
mod logging;
mod reporter;

use anyhow::Context;
use clap::{CommandFactory, Parser};
use cli::{Cli, Commands};
use colored::*;
use dotenv::dotenv;
use reporter::CliReporter;
use scenario_inventory::config::{self, AppConfig};
use scenario_inventory::{format_display_name, InventoryEngine};
use tracing::{error, info, warn};

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let _guard = logging::init_logger();

    let args = Cli::parse();

    let mut config = config::load_configuration(args.config.as_deref())
        .context("Error loading configuration")?;
    if let Some(output_dir) = args.output_dir {
        config.output_dir = output_dir;
    }

    match args.command {
        Some(Commands::Generate) => run_generate(config)?,
        Some(Commands::Labels { ids }) => {
            for id in ids {
                println!("{} -> {}", id, format_display_name(&id));
            }
        }
        Some(Commands::Clean) => {
            let report = InventoryEngine::new(config).clean(&CliReporter::new());
            info!(
                "{} stale files removed, {} failures",
                format!("{}", report.removed.len()).green(),
                format!("{}", report.failed).red(),
            );
        }
        Some(Commands::PrintConfig) => {
            let text = toml::to_string_pretty(&config).context("Error rendering configuration")?;
            println!("{}", text);
        }
        None => {
            let _ = Cli::command().print_long_help();
        }
    }

    Ok(())
}

fn run_generate(config: AppConfig) -> anyhow::Result<()> {
    let output_dir = config.output_dir.clone();
    let engine = InventoryEngine::new(config);
    let result = engine
        .run(&CliReporter::new())
        .with_context(|| format!("Error generating inventory in {}", output_dir))?;

    println!();
    info!("Files generated in {}", output_dir.cyan());
    for path in &result.emit.written {
        info!("  - {}", path.display());
    }
    for (path, err) in &result.emit.failed {
        error!("  - {} failed: {}", path.display(), err);
    }
    if result.cleanup.failed > 0 {
        warn!("{} stale files could not be removed", result.cleanup.failed);
    }

    for source in &result.sources {
        info!(
            "{}: {} types, {} scenarios",
            source.name,
            format!("{}", source.dropdown.total_types).green(),
            format!("{}", source.dropdown.total_scenarios).green(),
        );
    }
    info!(
        "Total: {} types, {} scenarios in {}",
        format!("{}", result.summary.statistics.total_message_types).cyan(),
        format!("{}", result.summary.statistics.total_scenarios).cyan(),
        format!("{:.2}s", result.duration.as_secs_f64()).green(),
    );

    Ok(())
}
