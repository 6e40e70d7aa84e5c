//! Backward path enumeration over the combinational fan-in structure.
//!
//! The search runs backward, one independent pass per terminal net: every
//! net that feeds a storage-element input, plus every primary output. Each
//! pass keeps a work-list of partial paths (hop sequences in reverse
//! construction order) and resolves the unique driver of the current net at
//! every step. Driving the search backward keeps the termination condition
//! local: a branch ends the moment its driver turns out to be a storage
//! element or the net has no driver at all (a primary input). Because
//! every net has at most one driver, the search only branches on fan-in
//! width, never on driver ambiguity.
//!
//! Each branch owns its own snapshot of the partial path, so sibling
//! branches can never alias one growing hop list. A net revisited within a
//! single partial path means the combinational portion of the netlist has a
//! feedback loop; the search fails rather than diverging.

use crate::error::StaError;
use crate::path::{Path, PathHop};
use std::collections::HashSet;
use tempo_netlist::{Circuit, NetId};

/// Computes the terminal nets of a circuit: every storage-element input
/// plus every primary output, deduplicated, in circuit order.
///
/// Flip-flop clock pins never appear here; the netlist reader strips
/// them before the circuit is built.
pub fn terminal_nets(circuit: &Circuit) -> Vec<NetId> {
    let mut seen = HashSet::new();
    let mut terminals = Vec::new();
    let candidates = circuit
        .cells()
        .iter()
        .filter(|cell| cell.is_sequential())
        .flat_map(|cell| cell.inputs.iter().copied())
        .chain(circuit.primary_outputs().iter().copied());
    for net in candidates {
        if seen.insert(net) {
            terminals.push(net);
        }
    }
    terminals
}

/// Enumerates every combinational path ending at a terminal net.
///
/// Each returned [`Path`] starts immediately after a storage-element
/// output or a primary input and consists entirely of combinational hops;
/// a zero-hop path marks a terminal wired straight to such a boundary. A
/// storage output fanning out to several terminals yields one independent
/// path per terminal reached; paths are never merged by shared prefix.
///
/// Fails with [`StaError::CombinationalLoop`] if a branch revisits a net
/// already on its own partial path.
pub fn enumerate_paths(circuit: &Circuit) -> Result<Vec<Path>, StaError> {
    let mut paths = Vec::new();
    for terminal in terminal_nets(circuit) {
        trace_terminal(circuit, terminal, &mut paths)?;
    }
    Ok(paths)
}

/// Runs one backward search from a single terminal net, appending every
/// completed path to `paths`.
fn trace_terminal(
    circuit: &Circuit,
    terminal: NetId,
    paths: &mut Vec<Path>,
) -> Result<(), StaError> {
    // Work-list of partial paths, hops in reverse construction order.
    let mut work: Vec<Vec<PathHop>> = vec![Vec::new()];

    while let Some(partial) = work.pop() {
        let current = partial.last().map_or(terminal, |hop| hop.input_net);

        let Some(cell) = circuit.driver_of(current) else {
            // No driver: the branch reached a primary input.
            paths.push(complete(partial));
            continue;
        };

        if cell.is_sequential() {
            // Reached a storage-element output.
            paths.push(complete(partial));
            continue;
        }

        for &input in &cell.inputs {
            if input == terminal
                || partial
                    .iter()
                    .any(|hop| hop.input_net == input || hop.output_net == input)
            {
                return Err(StaError::CombinationalLoop { net: input });
            }
            let mut branch = partial.clone();
            branch.push(PathHop::new(cell, input, current)?);
            work.push(branch);
        }
    }

    Ok(())
}

/// Reverses an accumulated hop sequence into signal-flow order.
fn complete(mut hops: Vec<PathHop>) -> Path {
    hops.reverse();
    Path::new(hops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempo_netlist::{Cell, CellId, CellKind};

    fn net(id: u32) -> NetId {
        NetId::from_raw(id)
    }

    /// Builds a circuit from (kind, inputs, outputs) triples, naming every
    /// referenced net after its number.
    fn build(cells: Vec<(CellKind, Vec<u32>, Vec<u32>)>, inputs: &[u32], outputs: &[u32]) -> Circuit {
        let mut names: HashMap<NetId, String> = HashMap::new();
        for (_, ins, outs) in &cells {
            for &n in ins.iter().chain(outs.iter()) {
                names.insert(net(n), format!("n{n}"));
            }
        }
        for &n in inputs.iter().chain(outputs.iter()) {
            names.insert(net(n), format!("n{n}"));
        }
        let cells = cells
            .into_iter()
            .map(|(kind, ins, outs)| Cell {
                id: CellId::from_raw(0),
                kind,
                inputs: ins.into_iter().map(net).collect(),
                outputs: outs.into_iter().map(net).collect(),
            })
            .collect();
        Circuit::new(
            cells,
            inputs.iter().copied().map(net).collect(),
            outputs.iter().copied().map(net).collect(),
            names,
        )
        .unwrap()
    }

    #[test]
    fn terminals_are_dff_inputs_and_primary_outputs() {
        let circuit = build(
            vec![
                (CellKind::Dff, vec![1], vec![2]),
                (CellKind::Not, vec![2], vec![3]),
                (CellKind::Dff, vec![3], vec![4]),
            ],
            &[1],
            &[5],
        );
        assert_eq!(terminal_nets(&circuit), vec![net(1), net(3), net(5)]);
    }

    #[test]
    fn terminal_dedup() {
        // Net 3 feeds a flip-flop and is also a primary output.
        let circuit = build(
            vec![
                (CellKind::Not, vec![1], vec![3]),
                (CellKind::Dff, vec![3], vec![4]),
            ],
            &[1],
            &[3],
        );
        assert_eq!(terminal_nets(&circuit), vec![net(3)]);
    }

    #[test]
    fn direct_wire_yields_one_empty_path() {
        // Storage output looped straight back to its own input.
        let circuit = build(vec![(CellKind::Dff, vec![1], vec![1])], &[], &[]);
        let paths = enumerate_paths(&circuit).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_empty());
    }

    #[test]
    fn three_cell_chain_yields_one_path() {
        let circuit = build(
            vec![
                (CellKind::Dff, vec![9], vec![1]),
                (CellKind::And, vec![1, 8], vec![2]),
                (CellKind::Or, vec![2, 8], vec![3]),
                (CellKind::Xor, vec![3, 8], vec![4]),
                (CellKind::Dff, vec![4], vec![5]),
            ],
            &[8, 9],
            &[],
        );
        let paths = enumerate_paths(&circuit).unwrap();
        // Terminal 9 (first DFF's input) gives one zero-hop path from the
        // primary input. Terminal 4 branches over each gate's two inputs:
        // a full-length path per AND input (storage output 1, primary
        // input 8) plus the shorter branches that stop at primary input 8.
        assert_eq!(paths.len(), 5);
        let from_storage: Vec<_> = paths
            .iter()
            .filter(|p| p.len() == 3 && p.hops()[0].input_net == net(1))
            .collect();
        assert_eq!(from_storage.len(), 1);
        let hops = from_storage[0].hops();
        assert_eq!(hops[0].input_net, net(1));
        assert_eq!(hops[0].output_net, net(2));
        assert_eq!(hops[1].input_net, net(2));
        assert_eq!(hops[1].output_net, net(3));
        assert_eq!(hops[2].input_net, net(3));
        assert_eq!(hops[2].output_net, net(4));
    }

    #[test]
    fn fanout_yields_one_path_per_terminal() {
        // One storage output drives two separate chains to two flip-flops.
        let circuit = build(
            vec![
                (CellKind::Dff, vec![9], vec![1]),
                (CellKind::Not, vec![1], vec![2]),
                (CellKind::Dff, vec![2], vec![3]),
                (CellKind::Xor, vec![1, 8], vec![4]),
                (CellKind::Dff, vec![4], vec![5]),
            ],
            &[8, 9],
            &[],
        );
        let paths = enumerate_paths(&circuit).unwrap();
        let not_paths: Vec<_> = paths
            .iter()
            .filter(|p| p.len() == 1 && p.hops()[0].output_net == net(2))
            .collect();
        let xor_paths: Vec<_> = paths
            .iter()
            .filter(|p| !p.is_empty() && p.hops().last().unwrap().output_net == net(4))
            .collect();
        assert_eq!(not_paths.len(), 1);
        // XOR branches on both of its inputs: storage output 1 and primary input 8.
        assert_eq!(xor_paths.len(), 2);
    }

    #[test]
    fn primary_output_is_a_terminal() {
        // No storage elements at all: input -> NOT -> output.
        let circuit = build(vec![(CellKind::Not, vec![1], vec![2])], &[1], &[2]);
        let paths = enumerate_paths(&circuit).unwrap();
        assert_eq!(paths.len(), 1);
        assert_eq!(paths[0].len(), 1);
        assert_eq!(paths[0].hops()[0].input_net, net(1));
    }

    #[test]
    fn undriven_terminal_yields_empty_path() {
        // A primary output net nothing drives.
        let circuit = build(vec![], &[], &[7]);
        let paths = enumerate_paths(&circuit).unwrap();
        assert_eq!(paths.len(), 1);
        assert!(paths[0].is_empty());
    }

    #[test]
    fn combinational_loop_detected() {
        // AND and OR feed each other; the AND also feeds a flip-flop.
        let circuit = build(
            vec![
                (CellKind::And, vec![2, 5], vec![3]),
                (CellKind::Or, vec![3, 6], vec![2]),
                (CellKind::Dff, vec![3], vec![7]),
            ],
            &[5, 6],
            &[],
        );
        let err = enumerate_paths(&circuit).unwrap_err();
        assert!(matches!(err, StaError::CombinationalLoop { net: n } if n == net(3)));
    }

    #[test]
    fn paths_are_contiguous_and_combinational() {
        let circuit = build(
            vec![
                (CellKind::Dff, vec![9], vec![1]),
                (CellKind::Nand, vec![1, 8], vec![2]),
                (CellKind::Nor, vec![2, 8], vec![3]),
                (CellKind::Dff, vec![3], vec![4]),
            ],
            &[8, 9],
            &[],
        );
        let paths = enumerate_paths(&circuit).unwrap();
        for path in &paths {
            for pair in path.hops().windows(2) {
                assert_eq!(pair[0].output_net, pair[1].input_net);
            }
            for hop in path.hops() {
                assert!(!circuit.cell(hop.cell).is_sequential());
            }
            // The launch boundary is a storage output or a primary input.
            if let Some(first) = path.hops().first() {
                match circuit.driver_of(first.input_net) {
                    Some(cell) => assert!(cell.is_sequential()),
                    None => assert!(circuit.is_primary_input(first.input_net)),
                }
            }
        }
    }
}
