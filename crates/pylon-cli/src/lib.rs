pub mod cli;
pub mod config;

pub use cli::{build_cli_command, AlgorithmChoice, Cli, Commands, OutputFormat};
pub use config::PylonConfig;
