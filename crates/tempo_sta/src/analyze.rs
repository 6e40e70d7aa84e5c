//! Setup-timing evaluation of the critical paths.
//!
//! The slowest combinational paths determine whether a clock edge can
//! safely launch data at one storage element and capture it at the next.
//! For each analyzed path with propagation delay `t_prop`, the timing
//! margin is
//!
//! ```text
//! slack = clock_period - clock_skew_max - t_prop - clk2q_max
//! ```
//!
//! and the path meets setup timing exactly when the slack is
//! non-negative. Every analyzed path is reported individually; no
//! aggregate verdict is computed beyond the per-path records.
//!
//! Hold-time checking (using `hold_time` and `clk2q_min`) is deliberately
//! not performed here; the constants travel with the configuration so a
//! later hold analysis can reuse them.

use crate::constraints::TimingConstraints;
use crate::error::StaError;
use crate::path::Path;
use crate::rank::{k_longest, rank_all, RankedPath};
use crate::trace::enumerate_paths;
use crate::validate::validate_paths;
use serde::{Deserialize, Serialize};
use tempo_netlist::{Circuit, DelayLibrary};

/// Number of critical paths analyzed by default.
///
/// Clamped to the number of discovered paths, so smaller designs simply
/// get all of their paths analyzed.
pub const DEFAULT_ANALYZED_PATHS: usize = 5;

/// The setup-timing record of one analyzed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathTiming {
    /// The analyzed path.
    pub path: Path,
    /// Total propagation delay through the path's cells.
    pub total_delay: u64,
    /// Timing margin; negative means a setup violation.
    pub slack: i64,
    /// `true` if the path meets setup timing (slack is non-negative).
    pub meets_timing: bool,
}

/// Per-path setup-timing results for the analyzed critical paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimingReport {
    /// The constraints the paths were evaluated against.
    pub constraints: TimingConstraints,
    /// One record per analyzed path, slowest first.
    pub paths: Vec<PathTiming>,
}

impl TimingReport {
    /// Returns the smallest slack among the analyzed paths, or `None`
    /// if no paths were analyzed.
    pub fn worst_slack(&self) -> Option<i64> {
        self.paths.iter().map(|p| p.slack).min()
    }

    /// Returns the number of analyzed paths that fail setup timing.
    pub fn violation_count(&self) -> usize {
        self.paths.iter().filter(|p| !p.meets_timing).count()
    }

    /// Returns `true` if no paths were analyzed.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Evaluates setup timing for the `k` slowest of the given validated paths.
///
/// `k` is clamped to the number of available paths; with zero paths the
/// report is empty, which is a valid outcome, not an error. Callers must
/// run [`validate_paths`](crate::validate::validate_paths) first;
/// [`run_analysis`] does both.
pub fn analyze_timing(
    circuit: &Circuit,
    library: &DelayLibrary,
    constraints: &TimingConstraints,
    paths: &[Path],
    k: usize,
) -> TimingReport {
    let critical = k_longest(circuit, library, paths, k);
    let paths = critical
        .into_iter()
        .map(|ranked| evaluate(constraints, ranked))
        .collect();
    TimingReport {
        constraints: constraints.clone(),
        paths,
    }
}

fn evaluate(constraints: &TimingConstraints, ranked: RankedPath) -> PathTiming {
    let slack = constraints.clock_period as i64
        - constraints.clock_skew_max as i64
        - ranked.delay as i64
        - constraints.clk2q_max as i64;
    PathTiming {
        path: ranked.path,
        total_delay: ranked.delay,
        slack,
        meets_timing: slack >= 0,
    }
}

/// The complete result of one analysis run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisRun {
    /// Every validated path with its total delay, in discovery order.
    pub paths: Vec<RankedPath>,
    /// Setup-timing records for the critical paths.
    pub report: TimingReport,
}

/// Runs the full analysis pipeline over a circuit.
///
/// Enumerates all combinational paths, gates them through the structural
/// validator, then evaluates setup timing for the `max_paths` slowest.
/// The validator runs unconditionally: no path reaches ranking or
/// analysis without passing it.
pub fn run_analysis(
    circuit: &Circuit,
    library: &DelayLibrary,
    constraints: &TimingConstraints,
    max_paths: usize,
) -> Result<AnalysisRun, StaError> {
    let paths = enumerate_paths(circuit)?;
    validate_paths(circuit, &paths)?;
    let report = analyze_timing(circuit, library, constraints, &paths, max_paths);
    let paths = rank_all(circuit, library, paths);
    Ok(AnalysisRun { paths, report })
}
