//! # pylon-io: Grid description loading
//!
//! Reads a grid description (substations plus lines) from TOML, YAML or
//! JSON and validates it into a [`pylon_core::Network`].
//!
//! ```toml
//! [[substations]]
//! id = "SS_1"
//! name = "Luzhniki"
//! category = "500kV"
//! capacity = 300.0
//!
//! [[lines]]
//! from = "SS_1"
//! to = "SS_10"
//! length = 5.2
//! capacity = 500.0
//! ```

pub mod spec;

pub use spec::{
    load_network_from_path, load_spec_from_path, parse_network, parse_spec, GridFormat,
    NetworkSpec, SubstationSpec,
};
