use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use pylon_algo::{shortest_paths_from, ShortestPathTree};
use pylon_cli::OutputFormat;
use pylon_core::Network;
use tabwriter::TabWriter;

use super::{join_path, label, load_grid, write_json};

pub fn handle(grid: &Path, from: &str, format: OutputFormat) -> Result<()> {
    let network = load_grid(grid)?;
    let tree = shortest_paths_from(&network, from)
        .with_context(|| format!("shortest distances from {from}"))?;
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Table => render_table(&mut out, &network, &tree),
        OutputFormat::Json => write_json(&mut out, &tree),
    }
}

fn render_table<W: Write>(out: &mut W, network: &Network, tree: &ShortestPathTree) -> Result<()> {
    writeln!(
        out,
        "Shortest distances from {}",
        label(network, tree.source.as_str())
    )?;
    let mut writer = TabWriter::new(&mut *out);
    writeln!(writer, "SUBSTATION\tNAME\tDISTANCE\tROUTE")?;
    for (id, distance) in tree.by_distance() {
        let name = network
            .substation(id.as_str())
            .map(|s| s.name.as_str())
            .unwrap_or("");
        let route = tree.path_to(id.as_str()).unwrap_or_default();
        writeln!(writer, "{id}\t{name}\t{distance}\t{}", join_path(&route))?;
    }
    for id in &tree.unreachable {
        let name = network
            .substation(id.as_str())
            .map(|s| s.name.as_str())
            .unwrap_or("");
        writeln!(writer, "{id}\t{name}\tunreachable\t-")?;
    }
    writer.flush()?;
    Ok(())
}
