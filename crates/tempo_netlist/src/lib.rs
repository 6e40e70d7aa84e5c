//! Circuit model and netlist input for the tempo timing analyzer.
//!
//! This crate owns everything upstream of the analysis core: the immutable
//! in-memory circuit representation (nets, cells, primary I/O), the per-kind
//! propagation delay library, and the Yosys JSON netlist reader that builds
//! a validated [`Circuit`] from a synthesized design.
//!
//! # Usage
//!
//! ```ignore
//! use tempo_netlist::{read_circuit, DelayLibrary};
//!
//! let circuit = read_circuit(Path::new("design.json"))?;
//! let library = DelayLibrary::default();
//! println!("{} cells", circuit.cell_count());
//! ```
//!
//! # Architecture
//!
//! - [`ids`] — opaque net/cell ID newtypes
//! - [`cell`] — cell instances and the closed kind set
//! - [`library`] — per-kind propagation delays
//! - [`circuit`] — the validated, read-only circuit model
//! - [`yosys`] — Yosys `write_json` reader
//! - [`error`] — netlist construction errors

#![warn(missing_docs)]

pub mod cell;
pub mod circuit;
pub mod error;
pub mod ids;
pub mod library;
pub mod yosys;

pub use cell::{Cell, CellKind};
pub use circuit::Circuit;
pub use error::NetlistError;
pub use ids::{CellId, NetId};
pub use library::DelayLibrary;
pub use yosys::{parse_circuit, read_circuit};
