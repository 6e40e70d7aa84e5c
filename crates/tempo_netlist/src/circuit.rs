//! Immutable circuit model: cells, primary I/O, and net display names.
//!
//! A [`Circuit`] is built once (by the Yosys reader, or directly in tests),
//! validated at construction, and read-only thereafter. Construction checks
//! the structural invariants the analysis relies on: no net is both a
//! primary input and a primary output, every net a cell references is in
//! the net universe, and every net has at most one driver.

use crate::cell::Cell;
use crate::error::NetlistError;
use crate::ids::{CellId, NetId};
use std::collections::HashMap;

/// A flattened synthesized circuit.
///
/// Holds the cell list, the primary input/output net sets, and a
/// net → display-name map. The clock net is not a primary input and does
/// not appear in any flip-flop's input list; the reader strips it.
#[derive(Debug, Clone)]
pub struct Circuit {
    cells: Vec<Cell>,
    inputs: Vec<NetId>,
    outputs: Vec<NetId>,
    net_names: HashMap<NetId, String>,
    /// net → index into `cells` of the unique driving cell.
    drivers: HashMap<NetId, usize>,
}

impl Circuit {
    /// Builds a circuit from its parts, assigning cell IDs by position.
    ///
    /// Fails if a net is both a primary input and a primary output, if a
    /// cell references a net absent from `net_names`, or if two cells
    /// drive the same net.
    pub fn new(
        mut cells: Vec<Cell>,
        inputs: Vec<NetId>,
        outputs: Vec<NetId>,
        net_names: HashMap<NetId, String>,
    ) -> Result<Self, NetlistError> {
        for &net in &inputs {
            if outputs.contains(&net) {
                return Err(NetlistError::ConflictingPort(net));
            }
        }

        let mut drivers = HashMap::new();
        for (index, cell) in cells.iter_mut().enumerate() {
            cell.id = CellId::from_raw(index as u32);
            for &net in cell.inputs.iter().chain(cell.outputs.iter()) {
                if !net_names.contains_key(&net) {
                    return Err(NetlistError::UnknownNet { cell: cell.id, net });
                }
            }
            for &net in &cell.outputs {
                if drivers.insert(net, index).is_some() {
                    return Err(NetlistError::MultipleDrivers(net));
                }
            }
        }

        Ok(Self {
            cells,
            inputs,
            outputs,
            net_names,
            drivers,
        })
    }

    /// Returns all cells in the circuit, in construction order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cell with the given ID.
    pub fn cell(&self, id: CellId) -> &Cell {
        &self.cells[id.as_raw() as usize]
    }

    /// Returns the unique cell driving `net`, or `None` if the net has no
    /// driver (it is a primary input or an unconnected wire).
    pub fn driver_of(&self, net: NetId) -> Option<&Cell> {
        self.drivers.get(&net).map(|&index| &self.cells[index])
    }

    /// Returns the primary input nets (the clock net is never among them).
    pub fn primary_inputs(&self) -> &[NetId] {
        &self.inputs
    }

    /// Returns the primary output nets.
    pub fn primary_outputs(&self) -> &[NetId] {
        &self.outputs
    }

    /// Returns `true` if `net` is a primary input.
    pub fn is_primary_input(&self, net: NetId) -> bool {
        self.inputs.contains(&net)
    }

    /// Returns `true` if `net` is a primary output.
    pub fn is_primary_output(&self, net: NetId) -> bool {
        self.outputs.contains(&net)
    }

    /// Returns the display name of `net`, if one was declared.
    pub fn net_name(&self, net: NetId) -> Option<&str> {
        self.net_names.get(&net).map(String::as_str)
    }

    /// Returns the net → display-name map.
    pub fn net_names(&self) -> &HashMap<NetId, String> {
        &self.net_names
    }

    /// Returns the number of cells in the circuit.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }
}
