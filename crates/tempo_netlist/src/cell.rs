//! Cell instances and the closed set of known cell kinds.
//!
//! Circuits produced by single-bit technology mapping contain only the
//! primitive gate library below plus the positive-edge flip-flop. The kind
//! set is closed: a netlist referencing any other cell type fails at
//! construction time.

use crate::ids::{CellId, NetId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of a cell, drawn from the single-bit primitive library.
///
/// All kinds except [`Dff`](CellKind::Dff) are combinational gates with a
/// fixed propagation delay looked up in a
/// [`DelayLibrary`](crate::library::DelayLibrary). `Dff` is the storage
/// element: it terminates combinational paths and has no per-cell delay
/// (its timing is governed by the clock-to-Q and setup/hold constants).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Inverter.
    Not,
    /// 2-input AND gate.
    And,
    /// 2-input OR gate.
    Or,
    /// 2-input XOR gate.
    Xor,
    /// 2-input NAND gate.
    Nand,
    /// 2-input NOR gate.
    Nor,
    /// 2-input XNOR gate.
    Xnor,
    /// Positive-edge-triggered D flip-flop (storage element).
    Dff,
}

impl CellKind {
    /// Parses a Yosys primitive type string (e.g. `$_AND_`, `$_DFF_P_`).
    ///
    /// Returns `None` for any string outside the known library.
    pub fn from_yosys(ty: &str) -> Option<Self> {
        match ty {
            "$_NOT_" => Some(Self::Not),
            "$_AND_" => Some(Self::And),
            "$_OR_" => Some(Self::Or),
            "$_XOR_" => Some(Self::Xor),
            "$_NAND_" => Some(Self::Nand),
            "$_NOR_" => Some(Self::Nor),
            "$_XNOR_" => Some(Self::Xnor),
            "$_DFF_P_" => Some(Self::Dff),
            _ => None,
        }
    }

    /// Returns the Yosys primitive type string for this kind.
    pub fn yosys_name(self) -> &'static str {
        match self {
            Self::Not => "$_NOT_",
            Self::And => "$_AND_",
            Self::Or => "$_OR_",
            Self::Xor => "$_XOR_",
            Self::Nand => "$_NAND_",
            Self::Nor => "$_NOR_",
            Self::Xnor => "$_XNOR_",
            Self::Dff => "$_DFF_P_",
        }
    }

    /// Returns `true` if this kind is the storage element.
    pub fn is_sequential(self) -> bool {
        matches!(self, Self::Dff)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.yosys_name())
    }
}

/// A cell instance: one gate or storage element in a circuit.
///
/// Inputs and outputs are nets. For a `Dff` the clock net is not listed in
/// `inputs`: it is stripped when the netlist is read, because the clock
/// pin never participates in a signal path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The unique ID of this cell within its circuit.
    pub id: CellId,
    /// The cell kind.
    pub kind: CellKind,
    /// Input nets (excluding a flip-flop's clock pin).
    pub inputs: Vec<NetId>,
    /// Output nets.
    pub outputs: Vec<NetId>,
}

impl Cell {
    /// Returns `true` if `net` is one of this cell's inputs.
    pub fn has_input(&self, net: NetId) -> bool {
        self.inputs.contains(&net)
    }

    /// Returns `true` if `net` is one of this cell's outputs.
    pub fn has_output(&self, net: NetId) -> bool {
        self.outputs.contains(&net)
    }

    /// Returns `true` if this cell is a storage element.
    pub fn is_sequential(&self) -> bool {
        self.kind.is_sequential()
    }
}
