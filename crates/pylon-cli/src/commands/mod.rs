pub mod convert;
pub mod critical;
pub mod distances;
pub mod graph;
pub mod path;
pub mod shutdown;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use pylon_core::Network;
use pylon_io::load_network_from_path;
use serde::Serialize;
use tracing::info;

pub(crate) fn load_grid(grid: &Path) -> Result<Network> {
    info!("Loading grid from {}", grid.display());
    load_network_from_path(grid)
}

pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value).context("serializing result to JSON")?;
    writeln!(out)?;
    Ok(())
}

/// `id (name)`, or just the id when the substation is unknown.
pub(crate) fn label(network: &Network, id: &str) -> String {
    match network.substation(id) {
        Some(substation) => format!("{id} ({})", substation.name),
        None => id.to_string(),
    }
}

pub(crate) fn join_path<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let parts: Vec<String> = ids.into_iter().map(|s| s.as_ref().to_string()).collect();
    if parts.is_empty() {
        return "-".to_string();
    }
    parts.join(" -> ")
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_path() {
        assert_eq!(join_path(["A", "B", "C"]), "A -> B -> C");
        assert_eq!(join_path(Vec::<String>::new()), "-");
    }

    #[test]
    fn test_label_falls_back_to_id() {
        let network = fixtures::tailed_triangle();
        assert_eq!(label(&network, "A"), "A (Alpha)");
        assert_eq!(label(&network, "Z"), "Z");
    }
}
