use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use pylon_cli::OutputFormat;
use pylon_core::{find_islands, graph_stats, GraphStats, IslandAnalysis};
use tabwriter::TabWriter;

use super::{load_grid, write_json};

pub fn handle_stats(grid: &Path, format: OutputFormat) -> Result<()> {
    let network = load_grid(grid)?;
    let stats = graph_stats(&network);
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Table => render_stats(&mut out, grid, &stats),
        OutputFormat::Json => write_json(&mut out, &stats),
    }
}

pub fn handle_islands(grid: &Path, format: OutputFormat) -> Result<()> {
    let network = load_grid(grid)?;
    let analysis = find_islands(&network);
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Table => render_islands(&mut out, &analysis),
        OutputFormat::Json => write_json(&mut out, &analysis),
    }
}

fn render_stats<W: Write>(out: &mut W, grid: &Path, stats: &GraphStats) -> Result<()> {
    writeln!(out, "Graph statistics for {}:", grid.display())?;
    writeln!(out, "  Substations   : {}", stats.node_count)?;
    writeln!(out, "  Lines         : {}", stats.edge_count)?;
    writeln!(out, "  Components    : {}", stats.connected_components)?;
    writeln!(
        out,
        "  Degree [min/avg/max]: {}/{:.2}/{}",
        stats.min_degree, stats.avg_degree, stats.max_degree
    )?;
    writeln!(out, "  Density       : {:.4}", stats.density)?;
    writeln!(out, "  Capacity      : {}", stats.total_capacity)?;
    Ok(())
}

fn render_islands<W: Write>(out: &mut W, analysis: &IslandAnalysis) -> Result<()> {
    let mut writer = TabWriter::new(&mut *out);
    writeln!(writer, "ISLAND\tSUBSTATIONS\tCAPACITY\tMEMBERS")?;
    for island in &analysis.islands {
        let members: Vec<&str> = island.members.iter().map(|id| id.as_str()).collect();
        writeln!(
            writer,
            "{}\t{}\t{}\t{}",
            island.island_id,
            island.member_count,
            island.capacity,
            members.join(", ")
        )?;
    }
    writer.flush()?;
    writeln!(out, "{} island(s), {} total", analysis.len(), analysis.total_capacity())?;
    Ok(())
}
