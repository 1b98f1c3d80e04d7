//! Error taxonomy for the grid store and the algorithms built on it.
//!
//! Every failure is local and recoverable: the store and the algorithms are
//! deterministic over their inputs, so a failed call never leaves partial
//! results behind and retrying it unchanged reproduces the same error.
//!
//! # Example
//!
//! ```
//! use pylon_core::{GridError, GridResult, Network};
//!
//! fn degree_of(network: &Network, id: &str) -> GridResult<usize> {
//!     network.degree(id)
//! }
//!
//! let network = Network::new();
//! assert!(matches!(degree_of(&network, "SS_1"), Err(GridError::UnknownNode(_))));
//! ```

use thiserror::Error;

use crate::units::Kilometers;
use crate::SubstationId;

/// Error type for all grid store and analysis operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    /// A referenced substation id is not in the network
    #[error("unknown substation '{0}'")]
    UnknownNode(SubstationId),

    /// A substation with the same id was already added
    #[error("duplicate substation '{0}'")]
    DuplicateNode(SubstationId),

    /// The unordered pair already has a line
    #[error("duplicate line between '{0}' and '{1}'")]
    DuplicateEdge(SubstationId, SubstationId),

    /// Line length is negative or not a finite number
    #[error("invalid length {length} on line '{from}'-'{to}'; lengths must be finite and >= 0")]
    InvalidWeight {
        from: SubstationId,
        to: SubstationId,
        length: Kilometers,
    },

    /// Structurally invalid line (self-loop)
    #[error("invalid line: {0}")]
    InvalidEdge(String),
}

/// Convenience type alias for Results using GridError.
pub type GridResult<T> = Result<T, GridError>;
