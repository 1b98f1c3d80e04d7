use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use pylon_algo::{simulate_shutdown, ShutdownConfig, ShutdownReport};
use pylon_cli::OutputFormat;
use tabwriter::TabWriter;
use tracing::info;

use super::{load_grid, write_json};

pub fn handle(
    grid: &Path,
    config: ShutdownConfig,
    format: OutputFormat,
    out_path: Option<&Path>,
) -> Result<()> {
    let network = load_grid(grid)?;
    info!(
        "Simulating shutdown of up to {} critical substation(s)",
        config.max_nodes
    );
    let report = simulate_shutdown(&network, config.max_nodes)
        .context("simulating critical substation shutdown")?;

    let mut out = io::stdout().lock();
    if let Some(path) = out_path {
        let payload =
            serde_json::to_string_pretty(&report).context("serializing shutdown report")?;
        fs::write(path, payload)
            .with_context(|| format!("writing shutdown report '{}'", path.display()))?;
        writeln!(out, "Shutdown report written to {}", path.display())?;
        return Ok(());
    }
    match format {
        OutputFormat::Table => render_table(&mut out, &report),
        OutputFormat::Json => write_json(&mut out, &report),
    }
}

fn render_table<W: Write>(out: &mut W, report: &ShutdownReport) -> Result<()> {
    if report.steps.is_empty() {
        if report.critical_nodes.is_empty() {
            writeln!(out, "No critical substations: no single outage splits the grid")?;
        } else {
            writeln!(out, "Shutdown budget is zero; nothing removed")?;
        }
    }

    for step in &report.steps {
        writeln!(
            out,
            "Step {}: remove {} ({}, {}, {}), {} line(s) before removal",
            step.step, step.removed, step.name, step.category, step.capacity, step.degree_before
        )?;
        let mut writer = TabWriter::new(&mut *out);
        writeln!(writer, "  ISLAND\tSUBSTATIONS\tCAPACITY\tMEMBERS")?;
        for island in &step.components {
            writeln!(
                writer,
                "  {}\t{}\t{}\t{}",
                island.island_id,
                island.member_count,
                island.capacity,
                island
                    .members
                    .iter()
                    .map(|id| id.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            )?;
        }
        writer.flush()?;
        writeln!(
            out,
            "  {} island(s), {} in service, {} lost",
            step.component_count(),
            step.total_capacity,
            step.capacity_lost
        )?;
    }

    writeln!(
        out,
        "Summary: {} of {} critical substation(s) removed, {} island(s), {} of {} in service",
        report.steps.len(),
        report.critical_nodes.len(),
        report.isolated_components,
        report.remaining_capacity,
        report.initial_capacity
    )?;
    Ok(())
}
