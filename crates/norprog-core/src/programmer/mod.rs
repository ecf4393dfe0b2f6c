//! Transport abstraction
//!
//! The driver only needs chip-select control, byte shifting and a clock. A
//! programmer crate implements [`SpiBus`] for its hardware.

mod traits;

#[cfg(test)]
pub(crate) mod mock;

pub use traits::{Selected, SpiBus};
