//! User defaults for the `pylon` CLI.
//!
//! Stored in `~/.pylon/config.toml`. Every section and field is optional;
//! anything left out falls back to the built-in default, and command-line
//! flags override whatever the file says.
//!
//! ```toml
//! [analysis]
//! algorithm = "bfs"
//! max_nodes = 5
//!
//! [output]
//! format = "json"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pylon_algo::ShutdownConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::{AlgorithmChoice, OutputFormat};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PylonConfig {
    pub analysis: AnalysisConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Strategy for `pylon path` when `--algorithm` is not given
    pub algorithm: AlgorithmChoice,
    /// Substations removed by `pylon shutdown` when `--max-nodes` is not given
    pub max_nodes: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            algorithm: AlgorithmChoice::default(),
            max_nodes: ShutdownConfig::default().max_nodes,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl PylonConfig {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".pylon"))
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load from `explicit` if given (it must exist), otherwise from the
    /// default location if a file is there, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading config '{}'", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("parsing config '{}'", path.display()))?;
        debug!(path = %path.display(), ?config, "config loaded");
        Ok(config)
    }

    pub fn algorithm(&self, flag: Option<AlgorithmChoice>) -> AlgorithmChoice {
        flag.unwrap_or(self.analysis.algorithm)
    }

    pub fn format(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.unwrap_or(self.output.format)
    }

    pub fn shutdown(&self, flag: Option<usize>) -> ShutdownConfig {
        ShutdownConfig {
            max_nodes: flag.unwrap_or(self.analysis.max_nodes),
        }
    }
}
