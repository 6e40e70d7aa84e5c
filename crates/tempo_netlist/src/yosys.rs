//! Reader for the Yosys `write_json` netlist format.
//!
//! Consumes the subset of the format a flattened single-bit netlist uses:
//! per-cell type/port-direction/connection tables, module ports, and net
//! names. Flip-flop clock pins are stripped while reading: the clock net
//! is recorded and excluded from both the flip-flop's input list and the
//! primary-input set, since it never participates in a signal path.

use crate::cell::{Cell, CellKind};
use crate::circuit::Circuit;
use crate::error::NetlistError;
use crate::ids::{CellId, NetId};
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;

/// Name of the clock pin on a flip-flop cell.
const DFF_CLOCK_PIN: &str = "C";

#[derive(Debug, Deserialize)]
struct NetlistFile {
    modules: BTreeMap<String, YosysModule>,
}

#[derive(Debug, Deserialize)]
struct YosysModule {
    #[serde(default)]
    ports: BTreeMap<String, YosysPort>,
    #[serde(default)]
    cells: BTreeMap<String, YosysCell>,
    #[serde(default)]
    netnames: BTreeMap<String, YosysNet>,
}

#[derive(Debug, Deserialize)]
struct YosysPort {
    direction: String,
    bits: Vec<Bit>,
}

#[derive(Debug, Deserialize)]
struct YosysCell {
    #[serde(rename = "type")]
    ty: String,
    #[serde(default)]
    port_directions: BTreeMap<String, String>,
    #[serde(default)]
    connections: BTreeMap<String, Vec<Bit>>,
}

#[derive(Debug, Deserialize)]
struct YosysNet {
    bits: Vec<Bit>,
}

/// One entry of a `bits` array: either a net index or a constant.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Bit {
    Net(u32),
    Const(String),
}

impl Bit {
    fn net(&self, name: &str) -> Result<NetId, NetlistError> {
        match self {
            Bit::Net(index) => Ok(NetId::from_raw(*index)),
            Bit::Const(bit) => Err(NetlistError::NonNetBit {
                name: name.to_string(),
                bit: bit.clone(),
            }),
        }
    }
}

/// Reads a circuit from a Yosys JSON netlist file.
pub fn read_circuit(path: &Path) -> Result<Circuit, NetlistError> {
    let content = std::fs::read_to_string(path)?;
    parse_circuit(&content)
}

/// Parses a circuit from Yosys JSON netlist text.
///
/// The first module (by name order) is taken as the design. The circuit
/// invariants are checked on construction, so a returned `Circuit` is
/// always structurally valid.
pub fn parse_circuit(json: &str) -> Result<Circuit, NetlistError> {
    let file: NetlistFile =
        serde_json::from_str(json).map_err(|e| NetlistError::Parse(e.to_string()))?;
    let (_, module) = file
        .modules
        .into_iter()
        .next()
        .ok_or(NetlistError::MissingModule)?;

    let mut cells = Vec::new();
    let mut clock_nets = HashSet::new();

    for (cell_name, raw) in &module.cells {
        let kind = CellKind::from_yosys(&raw.ty).ok_or_else(|| NetlistError::UnknownCellType {
            cell: cell_name.clone(),
            ty: raw.ty.clone(),
        })?;

        let mut inputs = Vec::new();
        let mut outputs = Vec::new();
        for (pin, bits) in &raw.connections {
            let direction = raw.port_directions.get(pin).map(String::as_str);
            for bit in bits {
                let net = bit.net(&format!("{cell_name}.{pin}"))?;
                if direction == Some("input") {
                    if kind == CellKind::Dff && pin == DFF_CLOCK_PIN {
                        clock_nets.insert(net);
                    } else {
                        inputs.push(net);
                    }
                } else {
                    outputs.push(net);
                }
            }
        }

        cells.push(Cell {
            id: CellId::from_raw(0), // reassigned by Circuit::new
            kind,
            inputs,
            outputs,
        });
    }

    let mut primary_inputs = Vec::new();
    let mut primary_outputs = Vec::new();
    for (port_name, port) in &module.ports {
        for bit in &port.bits {
            let net = bit.net(port_name)?;
            if port.direction == "input" {
                if !clock_nets.contains(&net) {
                    primary_inputs.push(net);
                }
            } else {
                primary_outputs.push(net);
            }
        }
    }

    let mut net_names: HashMap<NetId, String> = HashMap::new();
    for (name, raw) in &module.netnames {
        if raw.bits.len() == 1 {
            if let Bit::Net(index) = raw.bits[0] {
                net_names.insert(NetId::from_raw(index), name.clone());
            }
        } else {
            for (i, bit) in raw.bits.iter().enumerate() {
                if let Bit::Net(index) = bit {
                    net_names.insert(NetId::from_raw(*index), format!("{name}[{i}]"));
                }
            }
        }
    }

    Circuit::new(cells, primary_inputs, primary_outputs, net_names)
}
