use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use pylon_algo::{AlgorithmComparison, GridAnalyzer, PathResult};
use pylon_cli::{AlgorithmChoice, OutputFormat};
use pylon_core::Network;
use tabwriter::TabWriter;

use super::{join_path, label, load_grid, write_json};

pub fn handle(
    grid: &Path,
    from: &str,
    to: &str,
    algorithm: AlgorithmChoice,
    format: OutputFormat,
) -> Result<()> {
    let network = load_grid(grid)?;
    let analyzer = GridAnalyzer::new(&network);
    let mut out = io::stdout().lock();
    match algorithm.single() {
        Some(algorithm) => {
            let result = analyzer
                .path(algorithm, from, to)
                .with_context(|| format!("{algorithm} route {from} -> {to}"))?;
            match format {
                OutputFormat::Table => render_table(&mut out, &network, &[&result]),
                OutputFormat::Json => write_json(&mut out, &result),
            }
        }
        None => {
            let comparison = analyzer
                .compare(from, to)
                .with_context(|| format!("comparing routes {from} -> {to}"))?;
            match format {
                OutputFormat::Table => render_comparison(&mut out, &network, &comparison),
                OutputFormat::Json => write_json(&mut out, &comparison),
            }
        }
    }
}

fn render_table<W: Write>(out: &mut W, network: &Network, results: &[&PathResult]) -> Result<()> {
    if let Some(first) = results.first() {
        writeln!(
            out,
            "Route {} -> {}",
            label(network, first.start.as_str()),
            label(network, first.end.as_str())
        )?;
    }
    let mut writer = TabWriter::new(&mut *out);
    writeln!(writer, "ALGORITHM\tFOUND\tHOPS\tLENGTH\tVISITED\tEXPLORED\tPATH")?;
    for result in results {
        if result.found {
            writeln!(
                writer,
                "{}\tyes\t{}\t{}\t{}\t{}\t{}",
                result.algorithm,
                result.hops(),
                result.total_length,
                result.stats.nodes_visited,
                result.stats.edges_explored,
                join_path(&result.path)
            )?;
        } else {
            writeln!(
                writer,
                "{}\tno\t-\t-\t{}\t{}\t-",
                result.algorithm, result.stats.nodes_visited, result.stats.edges_explored
            )?;
        }
    }
    writer.flush()?;
    Ok(())
}

fn render_comparison<W: Write>(
    out: &mut W,
    network: &Network,
    comparison: &AlgorithmComparison,
) -> Result<()> {
    render_table(out, network, &comparison.results())?;
    if let Some(best) = comparison.best() {
        writeln!(out, "Shortest: {} ({})", best.algorithm, best.total_length)?;
    } else {
        writeln!(out, "No route between the two substations")?;
    }
    Ok(())
}
