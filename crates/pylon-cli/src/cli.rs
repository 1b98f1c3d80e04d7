use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum, ValueHint};
use pylon_algo::Algorithm;
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "pylon", author, version, about, long_about = None)]
pub struct Cli {
    /// Set the logging level
    #[arg(long, default_value = "info", global = true)]
    pub log_level: tracing::Level,

    /// Config file (defaults to ~/.pylon/config.toml when present)
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find a route between two substations
    Path {
        /// Grid description (TOML, YAML or JSON)
        #[arg(value_hint = ValueHint::FilePath)]
        grid: PathBuf,
        /// Source substation id
        #[arg(long)]
        from: String,
        /// Destination substation id
        #[arg(long)]
        to: String,
        /// Search strategy; `all` runs the three side by side
        #[arg(long, value_enum)]
        algorithm: Option<AlgorithmChoice>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Shortest distance from one substation to every other
    Distances {
        #[arg(value_hint = ValueHint::FilePath)]
        grid: PathBuf,
        #[arg(long)]
        from: String,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// List substations whose loss splits the grid
    Critical {
        #[arg(value_hint = ValueHint::FilePath)]
        grid: PathBuf,
        /// Also list lines whose loss splits the grid
        #[arg(long)]
        bridges: bool,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Take out the most critical substations one by one
    Shutdown {
        #[arg(value_hint = ValueHint::FilePath)]
        grid: PathBuf,
        /// Number of substations to remove
        #[arg(long)]
        max_nodes: Option<usize>,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
        /// Write the full report as JSON
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: Option<PathBuf>,
    },
    /// Graph stats summary
    Stats {
        #[arg(value_hint = ValueHint::FilePath)]
        grid: PathBuf,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Connected components and their capacity
    Islands {
        #[arg(value_hint = ValueHint::FilePath)]
        grid: PathBuf,
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Rewrite a grid description in another format (picked by extension)
    Convert {
        #[arg(value_hint = ValueHint::FilePath)]
        grid: PathBuf,
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        out: PathBuf,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmChoice {
    Dfs,
    Bfs,
    #[default]
    Dijkstra,
    All,
}

impl AlgorithmChoice {
    /// The single strategy to run, or `None` for all of them.
    pub fn single(self) -> Option<Algorithm> {
        match self {
            AlgorithmChoice::Dfs => Some(Algorithm::Dfs),
            AlgorithmChoice::Bfs => Some(Algorithm::Bfs),
            AlgorithmChoice::Dijkstra => Some(Algorithm::Dijkstra),
            AlgorithmChoice::All => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

pub fn build_cli_command() -> clap::Command {
    Cli::command()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        build_cli_command().debug_assert();
    }

    #[test]
    fn test_parse_path_command() {
        let cli = Cli::try_parse_from([
            "pylon",
            "path",
            "grid.toml",
            "--from",
            "SS_1",
            "--to",
            "SS_9",
            "--algorithm",
            "all",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(cli.log_level, tracing::Level::DEBUG);
        match cli.command {
            Commands::Path {
                from,
                to,
                algorithm,
                format,
                ..
            } => {
                assert_eq!((from.as_str(), to.as_str()), ("SS_1", "SS_9"));
                assert_eq!(algorithm, Some(AlgorithmChoice::All));
                assert_eq!(format, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from([
            "pylon", "path", "g.toml", "--from", "A", "--to", "B", "--algorithm", "astar",
        ])
        .is_err());
    }

    #[test]
    fn test_algorithm_choice_maps_to_strategy() {
        assert_eq!(AlgorithmChoice::Bfs.single(), Some(Algorithm::Bfs));
        assert_eq!(AlgorithmChoice::All.single(), None);
        assert_eq!(AlgorithmChoice::default(), AlgorithmChoice::Dijkstra);
    }
}
