//! Error types for path enumeration, validation, and analysis.

use tempo_netlist::{CellId, NetId};

/// Errors raised by the analysis core.
///
/// Every variant indicates a structural problem with the circuit or with a
/// path built over it. These are unrecoverable for the analysis run: they
/// signal a malformed circuit description, not a transient condition, so
/// there is no retry and no partial recovery.
#[derive(Debug, thiserror::Error)]
pub enum StaError {
    /// A path hop was constructed with a net that is not an input of its cell.
    #[error("net {net} is not an input of cell {cell}")]
    NotAnInput {
        /// The cell the hop referenced.
        cell: CellId,
        /// The offending net.
        net: NetId,
    },

    /// A path hop was constructed with a net that is not an output of its cell.
    #[error("net {net} is not an output of cell {cell}")]
    NotAnOutput {
        /// The cell the hop referenced.
        cell: CellId,
        /// The offending net.
        net: NetId,
    },

    /// A path contains a storage-element hop.
    #[error("path {path} contains storage cell {cell}; paths must be purely combinational")]
    SequentialHop {
        /// Index of the offending path in the analyzed collection.
        path: usize,
        /// The storage cell found on the path.
        cell: CellId,
    },

    /// Two adjacent hops of a path do not connect.
    #[error(
        "path {path} is not contiguous: hop output net {output_net} \
         does not feed the next hop's input net {input_net}"
    )]
    Discontiguous {
        /// Index of the offending path in the analyzed collection.
        path: usize,
        /// The earlier hop's output net.
        output_net: NetId,
        /// The later hop's input net.
        input_net: NetId,
    },

    /// The backward search revisited a net on the same partial path.
    #[error("combinational loop detected through net {net}")]
    CombinationalLoop {
        /// The net reached twice on one branch.
        net: NetId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_not_an_input() {
        let err = StaError::NotAnInput {
            cell: CellId::from_raw(3),
            net: NetId::from_raw(8),
        };
        assert_eq!(format!("{err}"), "net 8 is not an input of cell 3");
    }

    #[test]
    fn display_sequential_hop() {
        let err = StaError::SequentialHop {
            path: 2,
            cell: CellId::from_raw(5),
        };
        let msg = format!("{err}");
        assert!(msg.contains("path 2"));
        assert!(msg.contains("storage cell 5"));
    }

    #[test]
    fn display_discontiguous() {
        let err = StaError::Discontiguous {
            path: 0,
            output_net: NetId::from_raw(4),
            input_net: NetId::from_raw(7),
        };
        let msg = format!("{err}");
        assert!(msg.contains("output net 4"));
        assert!(msg.contains("input net 7"));
    }

    #[test]
    fn display_combinational_loop() {
        let err = StaError::CombinationalLoop {
            net: NetId::from_raw(12),
        };
        assert_eq!(format!("{err}"), "combinational loop detected through net 12");
    }
}
