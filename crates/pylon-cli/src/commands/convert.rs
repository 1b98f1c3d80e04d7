use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use pylon_io::{GridFormat, NetworkSpec};

use super::load_grid;

/// Validate `grid` and write it to `out` in the format named by its extension.
pub fn handle(grid: &Path, out: &Path) -> Result<()> {
    let format = GridFormat::from_path(out).ok_or_else(|| {
        anyhow!(
            "cannot tell output format from '{}'; use .toml, .yaml or .json",
            out.display()
        )
    })?;
    let network = load_grid(grid)?;
    let payload = NetworkSpec::from_network(&network).to_string_as(format)?;
    fs::write(out, payload).with_context(|| format!("writing grid '{}'", out.display()))?;
    println!(
        "Grid with {} substation(s) and {} line(s) written to {} ({format})",
        network.node_count(),
        network.edge_count(),
        out.display()
    );
    Ok(())
}
