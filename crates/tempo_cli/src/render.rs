//! Text rendering of circuits, paths, and timing reports.
//!
//! All functions build strings rather than printing, so the output can be
//! asserted on directly. Net references render as `net N (name)`, falling
//! back to the bare number when the netlist declared no name.

use tempo_netlist::{Circuit, NetId};
use tempo_sta::{Path, RankedPath, TimingReport};

/// Formats a net reference with its display name, if any.
fn net_ref(circuit: &Circuit, net: NetId) -> String {
    match circuit.net_name(net) {
        Some(name) => format!("net {net} ({name})"),
        None => format!("net {net}"),
    }
}

/// Renders the circuit overview: cell list, primary I/O, and net names.
pub fn circuit_summary(circuit: &Circuit) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "circuit: {} cells, {} inputs, {} outputs\n",
        circuit.cell_count(),
        circuit.primary_inputs().len(),
        circuit.primary_outputs().len()
    ));

    out.push_str("cells:\n");
    for cell in circuit.cells() {
        let inputs: Vec<String> = cell.inputs.iter().map(|n| n.to_string()).collect();
        let outputs: Vec<String> = cell.outputs.iter().map(|n| n.to_string()).collect();
        out.push_str(&format!(
            "  {}: {} in=[{}] out=[{}]\n",
            cell.id,
            cell.kind,
            inputs.join(", "),
            outputs.join(", ")
        ));
    }

    out.push_str("inputs:");
    for &net in circuit.primary_inputs() {
        out.push_str(&format!(" {}", net_ref(circuit, net)));
    }
    out.push('\n');
    out.push_str("outputs:");
    for &net in circuit.primary_outputs() {
        out.push_str(&format!(" {}", net_ref(circuit, net)));
    }
    out.push('\n');

    out.push_str("nets:\n");
    let mut nets: Vec<(&NetId, &String)> = circuit.net_names().iter().collect();
    nets.sort_by_key(|(net, _)| **net);
    for (net, name) in nets {
        out.push_str(&format!("  {net} -> {name}\n"));
    }
    out
}

/// Renders one path hop by hop, from launch boundary to capture boundary.
pub fn describe_path(circuit: &Circuit, path: &Path) -> String {
    if path.is_empty() {
        return "  storage output -> storage input (direct wire)\n".to_string();
    }

    let mut out = String::new();
    let first = path.hops()[0].input_net;
    let start = if circuit.is_primary_input(first) {
        "primary input"
    } else {
        "storage output"
    };
    out.push_str(&format!("  start: {start}\n"));
    out.push_str(&format!("    {}\n", net_ref(circuit, first)));
    for hop in path.hops() {
        let cell = circuit.cell(hop.cell);
        out.push_str(&format!("    -> {} cell {}\n", cell.kind, cell.id));
        out.push_str(&format!("    {}\n", net_ref(circuit, hop.output_net)));
    }
    let terminal = path.hops().last().map(|hop| hop.output_net);
    let end = match terminal {
        Some(net) if circuit.is_primary_output(net) => "primary output",
        _ => "storage input",
    };
    out.push_str(&format!("  end: {end}\n"));
    out
}

/// Renders the full list of discovered paths with their delays.
pub fn paths_section(circuit: &Circuit, paths: &[RankedPath]) -> String {
    let mut out = String::new();
    out.push_str(&format!("paths: {} found\n", paths.len()));
    for (index, ranked) in paths.iter().enumerate() {
        out.push_str(&format!("path {index} (delay {}):\n", ranked.delay));
        out.push_str(&describe_path(circuit, &ranked.path));
    }
    out
}

/// Renders a ranked path list under a heading, e.g. the K fastest paths.
pub fn ranked_section(circuit: &Circuit, heading: &str, paths: &[RankedPath]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{heading}:\n"));
    for ranked in paths {
        out.push_str(&format!("delay {}:\n", ranked.delay));
        out.push_str(&describe_path(circuit, &ranked.path));
    }
    out
}

/// Renders the per-path setup-timing verdicts.
pub fn report_section(circuit: &Circuit, report: &TimingReport) -> String {
    if report.is_empty() {
        return "timing: no paths found\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "timing: clock period {}, clock skew {}, clk2q max {}\n",
        report.constraints.clock_period,
        report.constraints.clock_skew_max,
        report.constraints.clk2q_max
    ));
    for timing in &report.paths {
        out.push_str(&describe_path(circuit, &timing.path));
        let verdict = if timing.meets_timing {
            "meets timing"
        } else {
            "fails setup timing"
        };
        out.push_str(&format!(
            "  delay {}, slack {} -> {verdict}\n",
            timing.total_delay, timing.slack
        ));
    }
    out
}
