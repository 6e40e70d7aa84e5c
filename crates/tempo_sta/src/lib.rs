//! Static timing analysis core for synthesized netlists.
//!
//! Given a validated [`Circuit`](tempo_netlist::Circuit), this crate
//! enumerates every combinational path between sequential boundaries,
//! gates the paths through a structural validator, ranks them by total
//! propagation delay, and evaluates setup-timing closure for the critical
//! (slowest) paths.
//!
//! # Usage
//!
//! ```ignore
//! use tempo_sta::{run_analysis, TimingConstraints, DEFAULT_ANALYZED_PATHS};
//!
//! let run = run_analysis(&circuit, &library, &TimingConstraints::default(),
//!                        DEFAULT_ANALYZED_PATHS)?;
//! for timing in &run.report.paths {
//!     println!("delay {} slack {}", timing.total_delay, timing.slack);
//! }
//! ```
//!
//! # Architecture
//!
//! - [`path`] — path hops and paths (fail-fast hop construction)
//! - [`trace`] — backward path enumeration from terminal nets
//! - [`validate`] — structural gate over enumerated paths
//! - [`rank`] — total delay and K slowest/fastest extraction
//! - [`constraints`] — timing constants and the TOML override file
//! - [`analyze`] — setup slack evaluation and report types
//! - [`error`] — analysis errors

#![warn(missing_docs)]

pub mod analyze;
pub mod constraints;
pub mod error;
pub mod path;
pub mod rank;
pub mod trace;
pub mod validate;

pub use analyze::{
    analyze_timing, run_analysis, AnalysisRun, PathTiming, TimingReport, DEFAULT_ANALYZED_PATHS,
};
pub use constraints::{parse_config, read_config, ConstraintError, TimingConfig, TimingConstraints};
pub use error::StaError;
pub use path::{Path, PathHop};
pub use rank::{k_longest, k_shortest, total_delay, RankedPath};
pub use trace::{enumerate_paths, terminal_nets};
pub use validate::validate_paths;
