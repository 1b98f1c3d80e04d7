use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;
use pylon_algo::{analyze_structure, StructuralAnalysis};
use pylon_cli::OutputFormat;
use pylon_core::Network;
use tabwriter::TabWriter;

use super::{load_grid, write_json};

pub fn handle(grid: &Path, bridges: bool, format: OutputFormat) -> Result<()> {
    let network = load_grid(grid)?;
    let analysis = analyze_structure(&network);
    let mut out = io::stdout().lock();
    match (format, bridges) {
        (OutputFormat::Table, _) => render_table(&mut out, &network, &analysis, bridges),
        (OutputFormat::Json, true) => write_json(&mut out, &analysis),
        (OutputFormat::Json, false) => write_json(&mut out, &analysis.critical_nodes),
    }
}

fn render_table<W: Write>(
    out: &mut W,
    network: &Network,
    analysis: &StructuralAnalysis,
    bridges: bool,
) -> Result<()> {
    if analysis.critical_nodes.is_empty() {
        writeln!(out, "No critical substations: no single outage splits the grid")?;
    } else {
        writeln!(out, "Critical substations ({}):", analysis.critical_nodes.len())?;
        let mut writer = TabWriter::new(&mut *out);
        writeln!(writer, "RANK\tSUBSTATION\tNAME\tCATEGORY\tDEGREE\tCAPACITY")?;
        for (rank, node) in analysis.critical_nodes.iter().enumerate() {
            let (name, category, capacity) = match network.substation(node.id.as_str()) {
                Some(s) => (s.name.as_str(), s.category.as_str(), s.capacity.to_string()),
                None => ("", "", String::new()),
            };
            writeln!(
                writer,
                "{}\t{}\t{name}\t{category}\t{}\t{capacity}",
                rank + 1,
                node.id,
                node.degree
            )?;
        }
        writer.flush()?;
    }

    if !bridges {
        return Ok(());
    }
    if analysis.bridges.is_empty() {
        writeln!(out, "No bridge lines")?;
        return Ok(());
    }
    writeln!(out, "Bridge lines ({}):", analysis.bridges.len())?;
    let mut writer = TabWriter::new(&mut *out);
    writeln!(writer, "FROM\tTO\tLENGTH")?;
    for bridge in &analysis.bridges {
        writeln!(writer, "{}\t{}\t{}", bridge.from, bridge.to, bridge.length)?;
    }
    writer.flush()?;
    Ok(())
}
