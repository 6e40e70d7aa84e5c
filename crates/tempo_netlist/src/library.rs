//! Per-kind propagation delay library.
//!
//! Delays are integers in one consistent time unit so that downstream slack
//! arithmetic stays exact. The storage element has no applicable delay; its
//! timing is governed by the clock-to-Q, setup, and hold constants carried
//! in the timing constraints, not by this table.

use crate::cell::CellKind;
use serde::{Deserialize, Serialize};

/// Default inverter delay.
pub const DEFAULT_NOT_DELAY: u64 = 5;
/// Default AND gate delay.
pub const DEFAULT_AND_DELAY: u64 = 9;
/// Default OR gate delay.
pub const DEFAULT_OR_DELAY: u64 = 9;
/// Default XOR gate delay.
pub const DEFAULT_XOR_DELAY: u64 = 12;
/// Default NAND gate delay.
pub const DEFAULT_NAND_DELAY: u64 = 13;
/// Default NOR gate delay.
pub const DEFAULT_NOR_DELAY: u64 = 12;
/// Default XNOR gate delay.
pub const DEFAULT_XNOR_DELAY: u64 = 12;

/// Propagation delays for every combinational cell kind.
///
/// One field per kind keeps the table closed: there is no way to build a
/// library with a missing entry, and [`delay`](Self::delay) is total over
/// the combinational kinds. Constructed once at startup and passed by
/// reference into ranking and analysis; never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DelayLibrary {
    /// Inverter delay.
    pub not: u64,
    /// AND gate delay.
    pub and: u64,
    /// OR gate delay.
    pub or: u64,
    /// XOR gate delay.
    pub xor: u64,
    /// NAND gate delay.
    pub nand: u64,
    /// NOR gate delay.
    pub nor: u64,
    /// XNOR gate delay.
    pub xnor: u64,
}

impl Default for DelayLibrary {
    fn default() -> Self {
        Self {
            not: DEFAULT_NOT_DELAY,
            and: DEFAULT_AND_DELAY,
            or: DEFAULT_OR_DELAY,
            xor: DEFAULT_XOR_DELAY,
            nand: DEFAULT_NAND_DELAY,
            nor: DEFAULT_NOR_DELAY,
            xnor: DEFAULT_XNOR_DELAY,
        }
    }
}

impl DelayLibrary {
    /// Returns the propagation delay for `kind`.
    ///
    /// Returns `None` for the storage element, whose delay is not
    /// applicable to combinational path timing.
    pub fn delay(&self, kind: CellKind) -> Option<u64> {
        match kind {
            CellKind::Not => Some(self.not),
            CellKind::And => Some(self.and),
            CellKind::Or => Some(self.or),
            CellKind::Xor => Some(self.xor),
            CellKind::Nand => Some(self.nand),
            CellKind::Nor => Some(self.nor),
            CellKind::Xnor => Some(self.xnor),
            CellKind::Dff => None,
        }
    }
}
