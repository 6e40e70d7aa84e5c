//! Opaque ID newtypes for netlist entities.
//!
//! [`NetId`] and [`CellId`] are thin `u32` wrappers. A `NetId` carries the
//! bit index assigned by synthesis (Yosys bit numbers map to it 1:1); a
//! `CellId` is an arena index into the circuit's cell list. Both are `Copy`,
//! `Hash`, and `Serialize`/`Deserialize`, and display as their raw number in
//! diagnostics.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(u32);

        impl $name {
            /// Creates an ID from a raw `u32` index.
            pub fn from_raw(index: u32) -> Self {
                Self(index)
            }

            /// Returns the raw `u32` index.
            pub fn as_raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_id!(
    /// Opaque, copyable ID for a single-bit wire in a circuit.
    NetId
);

define_id!(
    /// Opaque, copyable ID for a cell instance in a circuit.
    CellId
);
