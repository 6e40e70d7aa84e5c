//! Path delay computation and extraction of the K slowest/fastest paths.
//!
//! Ranking is a pure aggregation over an already-validated path
//! collection: total delay is the sum of the hops' cell delays, and the
//! K extremes are selected with a stable sort keyed on delay alone, so
//! the result does not depend on the order paths were discovered in
//! beyond tie-breaking, which is arbitrary but stable.

use crate::path::Path;
use serde::{Deserialize, Serialize};
use tempo_netlist::{Circuit, DelayLibrary};

/// A path paired with its total propagation delay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedPath {
    /// The path.
    pub path: Path,
    /// The sum of the path's cell delays.
    pub delay: u64,
}

/// Computes the total propagation delay of a path.
///
/// A zero-hop path has total delay 0. Storage cells have no delay entry,
/// and validated paths never contain them.
pub fn total_delay(circuit: &Circuit, library: &DelayLibrary, path: &Path) -> u64 {
    path.hops()
        .iter()
        .filter_map(|hop| library.delay(circuit.cell(hop.cell).kind))
        .sum()
}

/// Pairs every path with its total delay, preserving collection order.
pub fn rank_all(circuit: &Circuit, library: &DelayLibrary, paths: Vec<Path>) -> Vec<RankedPath> {
    paths
        .into_iter()
        .map(|path| {
            let delay = total_delay(circuit, library, &path);
            RankedPath { path, delay }
        })
        .collect()
}

/// Returns the `k` slowest paths, sorted by descending delay.
///
/// `k` is clamped to the number of available paths, so asking for more
/// paths than exist returns all of them.
pub fn k_longest(
    circuit: &Circuit,
    library: &DelayLibrary,
    paths: &[Path],
    k: usize,
) -> Vec<RankedPath> {
    let mut ranked = rank_all(circuit, library, paths.to_vec());
    ranked.sort_by(|a, b| b.delay.cmp(&a.delay));
    ranked.truncate(k.min(paths.len()));
    ranked
}

/// Returns the `k` fastest paths, sorted by ascending delay.
///
/// `k` is clamped to the number of available paths.
pub fn k_shortest(
    circuit: &Circuit,
    library: &DelayLibrary,
    paths: &[Path],
    k: usize,
) -> Vec<RankedPath> {
    let mut ranked = rank_all(circuit, library, paths.to_vec());
    ranked.sort_by(|a, b| a.delay.cmp(&b.delay));
    ranked.truncate(k.min(paths.len()));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathHop;
    use std::collections::HashMap;
    use tempo_netlist::{Cell, CellId, CellKind, NetId};

    fn net(id: u32) -> NetId {
        NetId::from_raw(id)
    }

    /// A circuit holding one single-input gate of each combinational kind,
    /// each driving its own net, for assembling synthetic paths.
    fn gate_box() -> Circuit {
        let kinds = [
            CellKind::Not,
            CellKind::And,
            CellKind::Or,
            CellKind::Xor,
            CellKind::Nand,
            CellKind::Nor,
            CellKind::Xnor,
        ];
        let mut names = HashMap::new();
        names.insert(net(0), "in".to_string());
        let cells = kinds
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                let out = net(i as u32 + 1);
                names.insert(out, format!("n{}", i + 1));
                Cell {
                    id: CellId::from_raw(0),
                    kind,
                    inputs: vec![net(0)],
                    outputs: vec![out],
                }
            })
            .collect();
        Circuit::new(cells, vec![], vec![], names).unwrap()
    }

    /// A one-hop path through the cell with the given index.
    fn one_hop(circuit: &Circuit, cell: u32) -> Path {
        let cell = circuit.cell(CellId::from_raw(cell));
        Path::new(vec![PathHop::new(cell, net(0), cell.outputs[0]).unwrap()])
    }

    #[test]
    fn empty_path_has_zero_delay() {
        let circuit = gate_box();
        let library = DelayLibrary::default();
        assert_eq!(total_delay(&circuit, &library, &Path::empty()), 0);
    }

    #[test]
    fn delay_is_additive() {
        let circuit = gate_box();
        let library = DelayLibrary::default();
        // AND (9) then XOR (12): membership is what matters for delay,
        // contiguity is the validator's concern.
        let and_hop = one_hop(&circuit, 1).hops()[0];
        let xor_hop = one_hop(&circuit, 3).hops()[0];
        let path = Path::new(vec![and_hop, xor_hop]);
        assert_eq!(total_delay(&circuit, &library, &path), 21);
    }

    #[test]
    fn k_longest_matches_brute_force() {
        let circuit = gate_box();
        let library = DelayLibrary::default();
        // Delays: NOT 5, AND 9, OR 9, XOR 12, NAND 13, NOR 12, XNOR 12.
        let paths: Vec<Path> = (0..7).map(|i| one_hop(&circuit, i)).collect();

        let mut expected: Vec<u64> = paths
            .iter()
            .map(|p| total_delay(&circuit, &library, p))
            .collect();
        expected.sort_unstable_by(|a, b| b.cmp(a));
        expected.truncate(3);

        let got: Vec<u64> = k_longest(&circuit, &library, &paths, 3)
            .iter()
            .map(|r| r.delay)
            .collect();
        assert_eq!(got, expected);
        assert_eq!(got, vec![13, 12, 12]);
    }

    #[test]
    fn k_shortest_matches_brute_force() {
        let circuit = gate_box();
        let library = DelayLibrary::default();
        let paths: Vec<Path> = (0..7).map(|i| one_hop(&circuit, i)).collect();
        let got: Vec<u64> = k_shortest(&circuit, &library, &paths, 3)
            .iter()
            .map(|r| r.delay)
            .collect();
        assert_eq!(got, vec![5, 9, 9]);
    }

    #[test]
    fn ties_broken_by_collection_order() {
        let circuit = gate_box();
        let library = DelayLibrary::default();
        // XOR, NOR, XNOR all have delay 12; stable sort keeps their order.
        let paths = vec![one_hop(&circuit, 3), one_hop(&circuit, 5), one_hop(&circuit, 6)];
        let ranked = k_longest(&circuit, &library, &paths, 3);
        assert_eq!(ranked[0].path, paths[0]);
        assert_eq!(ranked[1].path, paths[1]);
        assert_eq!(ranked[2].path, paths[2]);
    }

    #[test]
    fn k_clamped_to_available_paths() {
        let circuit = gate_box();
        let library = DelayLibrary::default();
        let paths = vec![one_hop(&circuit, 0), one_hop(&circuit, 1)];
        assert_eq!(k_longest(&circuit, &library, &paths, 10).len(), 2);
        assert_eq!(k_shortest(&circuit, &library, &paths, 10).len(), 2);
        assert!(k_longest(&circuit, &library, &[], 5).is_empty());
    }

    #[test]
    fn rank_all_preserves_order() {
        let circuit = gate_box();
        let library = DelayLibrary::default();
        let paths = vec![one_hop(&circuit, 4), one_hop(&circuit, 0)];
        let ranked = rank_all(&circuit, &library, paths);
        assert_eq!(ranked[0].delay, 13);
        assert_eq!(ranked[1].delay, 5);
    }

    #[test]
    fn result_independent_of_discovery_order() {
        let circuit = gate_box();
        let library = DelayLibrary::default();
        let forward: Vec<Path> = (0..7).map(|i| one_hop(&circuit, i)).collect();
        let reverse: Vec<Path> = (0..7).rev().map(|i| one_hop(&circuit, i)).collect();
        let a: Vec<u64> = k_longest(&circuit, &library, &forward, 7)
            .iter()
            .map(|r| r.delay)
            .collect();
        let b: Vec<u64> = k_longest(&circuit, &library, &reverse, 7)
            .iter()
            .map(|r| r.delay)
            .collect();
        assert_eq!(a, b);
    }
}
