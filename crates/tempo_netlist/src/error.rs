//! Error types for netlist reading and circuit construction.

use crate::ids::{CellId, NetId};

/// Errors that can occur while reading a netlist or building a circuit.
///
/// All of these indicate a malformed circuit description. They are fatal:
/// the analysis run aborts and nothing downstream ever sees a circuit that
/// failed construction.
#[derive(Debug, thiserror::Error)]
pub enum NetlistError {
    /// An I/O error occurred while reading the netlist file.
    #[error("failed to read netlist: {0}")]
    Io(#[from] std::io::Error),

    /// The JSON content could not be parsed.
    #[error("failed to parse netlist: {0}")]
    Parse(String),

    /// The netlist file contains no modules.
    #[error("netlist contains no modules")]
    MissingModule,

    /// A cell's declared type is not in the known cell library.
    #[error("cell '{cell}' has unknown type '{ty}'; this may be caused by a synthesis issue")]
    UnknownCellType {
        /// The cell's instance name in the netlist.
        cell: String,
        /// The unrecognized type string.
        ty: String,
    },

    /// A connection bit is a constant ("0"/"1"/"x") rather than a net.
    #[error("connection '{name}' references constant bit '{bit}', not a net")]
    NonNetBit {
        /// The cell port or module port the bit appeared on.
        name: String,
        /// The constant bit string.
        bit: String,
    },

    /// A net is declared both a primary input and a primary output.
    #[error("net {0} is both a primary input and a primary output")]
    ConflictingPort(NetId),

    /// More than one cell drives the same net.
    #[error("net {0} is driven by more than one cell")]
    MultipleDrivers(NetId),

    /// A cell references a net that is not in the circuit's net universe.
    #[error("cell {cell} references unknown net {net}")]
    UnknownNet {
        /// The referencing cell.
        cell: CellId,
        /// The net missing from the net universe.
        net: NetId,
    },
}
