//! Structural gate run over every enumerated path.
//!
//! Re-checks the path invariants before any path is trusted by ranking or
//! timing analysis: every hop must reference genuine pins of its cell, no
//! hop may traverse a storage element, and adjacent hops must connect.
//! The check is a pure accept/reject gate: it corrects nothing, and it
//! fails on the first violation, naming the offending path. Downstream
//! components therefore never defend against malformed paths.

use crate::error::StaError;
use crate::path::Path;
use tempo_netlist::Circuit;

/// Validates every path in `paths` against the structural invariants.
///
/// Returns the first violation found, identifying the offending path by
/// its index in the collection.
pub fn validate_paths(circuit: &Circuit, paths: &[Path]) -> Result<(), StaError> {
    for (index, path) in paths.iter().enumerate() {
        validate_path(circuit, index, path)?;
    }
    Ok(())
}

fn validate_path(circuit: &Circuit, index: usize, path: &Path) -> Result<(), StaError> {
    for hop in path.hops() {
        let cell = circuit.cell(hop.cell);
        if cell.is_sequential() {
            return Err(StaError::SequentialHop {
                path: index,
                cell: cell.id,
            });
        }
        if !cell.has_input(hop.input_net) {
            return Err(StaError::NotAnInput {
                cell: cell.id,
                net: hop.input_net,
            });
        }
        if !cell.has_output(hop.output_net) {
            return Err(StaError::NotAnOutput {
                cell: cell.id,
                net: hop.output_net,
            });
        }
    }

    for pair in path.hops().windows(2) {
        if pair[0].output_net != pair[1].input_net {
            return Err(StaError::Discontiguous {
                path: index,
                output_net: pair[0].output_net,
                input_net: pair[1].input_net,
            });
        }
    }

    Ok(())
}
