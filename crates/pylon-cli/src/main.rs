use std::io;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use pylon_cli::{Cli, Commands, PylonConfig};
use tracing::{error, info};
use tracing_subscriber::FmtSubscriber;

mod commands;

fn run(cli: &Cli) -> Result<()> {
    let config = PylonConfig::load(cli.config.as_deref())?;

    match &cli.command {
        Commands::Path {
            grid,
            from,
            to,
            algorithm,
            format,
        } => {
            info!("Finding route {} -> {} in {}", from, to, grid.display());
            commands::path::handle(
                grid,
                from,
                to,
                config.algorithm(*algorithm),
                config.format(*format),
            )
        }
        Commands::Distances { grid, from, format } => {
            info!("Computing distances from {} in {}", from, grid.display());
            commands::distances::handle(grid, from, config.format(*format))
        }
        Commands::Critical {
            grid,
            bridges,
            format,
        } => {
            info!("Finding critical substations in {}", grid.display());
            commands::critical::handle(grid, *bridges, config.format(*format))
        }
        Commands::Shutdown {
            grid,
            max_nodes,
            format,
            out,
        } => commands::shutdown::handle(
            grid,
            config.shutdown(*max_nodes),
            config.format(*format),
            out.as_deref(),
        ),
        Commands::Stats { grid, format } => {
            info!("Displaying graph statistics for {}", grid.display());
            commands::graph::handle_stats(grid, config.format(*format))
        }
        Commands::Islands { grid, format } => {
            info!("Finding islands in {}", grid.display());
            commands::graph::handle_islands(grid, config.format(*format))
        }
        Commands::Convert { grid, out } => {
            info!("Converting {} to {}", grid.display(), out.display());
            commands::convert::handle(grid, out)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // logs go to stderr so table and JSON output on stdout stay clean
    let subscriber = FmtSubscriber::builder()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .finish();
    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("setting default subscriber failed: {err}");
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("pylon failed: {:?}", e);
            ExitCode::FAILURE
        }
    }
}
