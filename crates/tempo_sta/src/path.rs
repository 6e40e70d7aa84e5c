//! Combinational paths and their hops.
//!
//! A [`Path`] is an ordered chain of [`PathHop`]s between two sequential
//! boundaries (or the circuit boundary), read in the direction signal
//! flows. Paths are pure derived data: the enumerator produces them fresh
//! on every run and nothing mutates them afterwards. They reference the
//! circuit only through net and cell IDs.

use crate::error::StaError;
use serde::{Deserialize, Serialize};
use tempo_netlist::{Cell, CellId, NetId};

/// One traversal step through a combinational cell.
///
/// Records the cell traversed, the net consumed as its input for this
/// step, and the net produced as its output. Construction is fail-fast:
/// [`PathHop::new`] rejects a net that is not genuinely a pin of the cell,
/// so a hop that exists is always structurally sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathHop {
    /// The cell traversed by this hop.
    pub cell: CellId,
    /// The cell input net consumed by this step.
    pub input_net: NetId,
    /// The cell output net produced by this step.
    pub output_net: NetId,
}

impl PathHop {
    /// Creates a hop through `cell` from `input_net` to `output_net`.
    ///
    /// Fails immediately if `input_net` is not an input of the cell or
    /// `output_net` is not an output of it.
    pub fn new(cell: &Cell, input_net: NetId, output_net: NetId) -> Result<Self, StaError> {
        if !cell.has_input(input_net) {
            return Err(StaError::NotAnInput {
                cell: cell.id,
                net: input_net,
            });
        }
        if !cell.has_output(output_net) {
            return Err(StaError::NotAnOutput {
                cell: cell.id,
                net: output_net,
            });
        }
        Ok(Self {
            cell: cell.id,
            input_net,
            output_net,
        })
    }
}

/// An ordered sequence of hops from one sequential boundary to the next.
///
/// The empty path is valid: it represents a storage-element output wired
/// directly to a storage-element input (or a primary output) with no
/// intervening logic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    hops: Vec<PathHop>,
}

impl Path {
    /// Creates a path from hops listed in signal-flow order.
    pub fn new(hops: Vec<PathHop>) -> Self {
        Self { hops }
    }

    /// Creates the empty path (direct wire between sequential boundaries).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the hops in signal-flow order.
    pub fn hops(&self) -> &[PathHop] {
        &self.hops
    }

    /// Returns the number of hops.
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Returns `true` if the path has no hops.
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }
}
