use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};
use pylon_core::{LineSpec, Megawatts, Network, Substation, SubstationId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// On-disk grid description.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NetworkSpec {
    #[serde(default)]
    pub substations: Vec<SubstationSpec>,
    #[serde(default)]
    pub lines: Vec<LineSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstationSpec {
    pub id: SubstationId,
    /// Falls back to the id
    pub name: Option<String>,
    #[serde(default = "default_category", alias = "voltage")]
    pub category: String,
    pub district: Option<String>,
    #[serde(default, alias = "capacity_mw")]
    pub capacity: Megawatts,
}

fn default_category() -> String {
    "unspecified".to_string()
}

impl SubstationSpec {
    pub fn into_substation(self) -> Substation {
        let name = self.name.unwrap_or_else(|| self.id.to_string());
        let mut substation = Substation::new(self.id, name, self.category, self.capacity);
        substation.district = self.district;
        substation
    }
}

impl From<&Substation> for SubstationSpec {
    fn from(substation: &Substation) -> Self {
        Self {
            id: substation.id.clone(),
            name: Some(substation.name.clone()),
            category: substation.category.clone(),
            district: substation.district.clone(),
            capacity: substation.capacity,
        }
    }
}

impl NetworkSpec {
    /// Validate into a network. The first invalid entry aborts the build.
    pub fn into_network(self) -> Result<Network> {
        let mut network = Network::new();
        for (i, substation) in self.substations.into_iter().enumerate() {
            let id = substation.id.clone();
            network
                .add_node(substation.into_substation())
                .with_context(|| format!("substation #{} ('{}')", i + 1, id))?;
        }
        for (i, line) in self.lines.into_iter().enumerate() {
            let (from, to) = (line.from.clone(), line.to.clone());
            network
                .add_line(line)
                .with_context(|| format!("line #{} ('{}' - '{}')", i + 1, from, to))?;
        }
        Ok(network)
    }

    /// Description of an existing network, substations and lines id-ordered.
    pub fn from_network(network: &Network) -> Self {
        Self {
            substations: network.substations().map(SubstationSpec::from).collect(),
            lines: network
                .lines()
                .into_iter()
                .map(|line| LineSpec {
                    from: line.from.clone(),
                    to: line.to.clone(),
                    length: line.line.length,
                    capacity: line.line.capacity,
                    category: line.line.category.clone(),
                })
                .collect(),
        }
    }

    pub fn to_string_as(&self, format: GridFormat) -> Result<String> {
        match format {
            GridFormat::Toml => toml::to_string_pretty(self).context("serializing grid toml"),
            GridFormat::Yaml => serde_yaml::to_string(self).context("serializing grid yaml"),
            GridFormat::Json => {
                serde_json::to_string_pretty(self).context("serializing grid json")
            }
        }
    }
}

/// Serialization format of a grid description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridFormat {
    Toml,
    Yaml,
    Json,
}

impl GridFormat {
    /// Trial order when the format cannot be told from the file name.
    pub const FALLBACK_ORDER: [GridFormat; 3] =
        [GridFormat::Toml, GridFormat::Yaml, GridFormat::Json];

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| ext.parse().ok())
    }
}

impl FromStr for GridFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(GridFormat::Toml),
            "yaml" | "yml" => Ok(GridFormat::Yaml),
            "json" => Ok(GridFormat::Json),
            other => Err(anyhow!("unknown grid format '{other}'")),
        }
    }
}

impl fmt::Display for GridFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            GridFormat::Toml => "toml",
            GridFormat::Yaml => "yaml",
            GridFormat::Json => "json",
        })
    }
}

fn parse_as(data: &str, format: GridFormat) -> Result<NetworkSpec> {
    match format {
        GridFormat::Toml => toml::from_str(data).context("parsing grid toml"),
        GridFormat::Yaml => serde_yaml::from_str(data).context("parsing grid yaml"),
        GridFormat::Json => serde_json::from_str(data).context("parsing grid json"),
    }
}

/// Parse a description without validating it.
///
/// With `format == None` each of [`GridFormat::FALLBACK_ORDER`] is tried in
/// turn and the first successful parse wins.
pub fn parse_spec(data: &str, format: Option<GridFormat>) -> Result<NetworkSpec> {
    if let Some(format) = format {
        return parse_as(data, format);
    }
    for format in GridFormat::FALLBACK_ORDER {
        match parse_as(data, format) {
            Ok(spec) => {
                debug!(%format, "grid description parsed by fallback");
                return Ok(spec);
            }
            Err(err) => debug!(%format, error = %err, "fallback parse failed"),
        }
    }
    Err(anyhow!(
        "parsing grid description: not valid toml, yaml or json"
    ))
}

/// Parse and validate a description into a [`Network`].
pub fn parse_network(data: &str, format: Option<GridFormat>) -> Result<Network> {
    parse_spec(data, format)?
        .into_network()
        .context("building network from grid description")
}

pub fn load_spec_from_path(path: &Path) -> Result<NetworkSpec> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("reading grid description '{}'", path.display()))?;
    parse_spec(&data, GridFormat::from_path(path))
        .with_context(|| format!("loading grid description '{}'", path.display()))
}

/// Read, parse and validate a grid file; format is picked by extension.
pub fn load_network_from_path(path: &Path) -> Result<Network> {
    let network = load_spec_from_path(path)?
        .into_network()
        .with_context(|| format!("building network from '{}'", path.display()))?;
    debug!(
        path = %path.display(),
        substations = network.node_count(),
        lines = network.edge_count(),
        "grid loaded"
    );
    Ok(network)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pylon_core::{GridError, Kilometers};

    const TOML_GRID: &str = r#"
[[substations]]
id = "A"
name = "Alpha"
category = "220kV"
district = "North"
capacity = 120.0

[[substations]]
id = "B"
voltage = "110kV"
capacity_mw = 80.0

[[lines]]
from = "A"
to = "B"
length = 4.5
capacity = 200.0
category = "110kV"
"#;

    #[test]
    fn test_parse_toml_with_aliases_and_defaults() {
        let network = parse_network(TOML_GRID, Some(GridFormat::Toml)).unwrap();
        assert_eq!(network.node_count(), 2);
        let b = network.get("B").unwrap();
        assert_eq!(b.name, "B");
        assert_eq!(b.category, "110kV");
        assert_eq!(b.capacity, Megawatts(80.0));
        assert_eq!(network.get("A").unwrap().district.as_deref(), Some("North"));
        let line = network.line_between("B", "A").unwrap();
        assert_eq!(line.length, Kilometers(4.5));
        assert_eq!(line.category.as_deref(), Some("110kV"));
    }

    #[test]
    fn test_fallback_detects_each_format() {
        let spec = parse_spec(TOML_GRID, None).unwrap();
        let json = spec.to_string_as(GridFormat::Json).unwrap();
        let yaml = spec.to_string_as(GridFormat::Yaml).unwrap();
        assert_eq!(parse_spec(&json, None).unwrap(), spec);
        assert_eq!(parse_spec(&yaml, None).unwrap(), spec);
        assert!(parse_spec("{{{ not a grid", None).is_err());
    }

    #[test]
    fn test_invalid_line_reports_context() {
        let data = r#"{
            "substations": [{"id": "A"}, {"id": "B"}],
            "lines": [
                {"from": "A", "to": "B", "length": 1.0},
                {"from": "A", "to": "C", "length": 2.0}
            ]
        }"#;
        let err = parse_network(data, Some(GridFormat::Json)).unwrap_err();
        assert!(format!("{err:#}").contains("line #2 ('A' - 'C')"));
        assert_eq!(
            err.root_cause().downcast_ref::<GridError>(),
            Some(&GridError::UnknownNode("C".into()))
        );
    }

    #[test]
    fn test_negative_length_rejected() {
        let data = r#"{
            "substations": [{"id": "A"}, {"id": "B"}],
            "lines": [{"from": "A", "to": "B", "length": -3.0}]
        }"#;
        let err = parse_network(data, None).unwrap_err();
        assert!(matches!(
            err.root_cause().downcast_ref::<GridError>(),
            Some(GridError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn test_duplicate_substation_rejected() {
        let data = "substations:\n  - id: A\n  - id: A\n";
        let err = parse_network(data, Some(GridFormat::Yaml)).unwrap_err();
        assert!(format!("{err:#}").contains("substation #2 ('A')"));
    }

    #[test]
    fn test_from_network_round_trips() {
        let network = parse_network(TOML_GRID, None).unwrap();
        let rebuilt = NetworkSpec::from_network(&network).into_network().unwrap();
        assert_eq!(rebuilt.lines().len(), network.lines().len());
        assert_eq!(
            rebuilt.substations().collect::<Vec<_>>(),
            network.substations().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(GridFormat::from_path(Path::new("g.YML")), Some(GridFormat::Yaml));
        assert_eq!(GridFormat::from_path(Path::new("g.toml")), Some(GridFormat::Toml));
        assert_eq!(GridFormat::from_path(Path::new("grid")), None);
        assert!("csv".parse::<GridFormat>().is_err());
    }
}
