//! High-level flash operations
//!
//! This module provides identification plus erase, read, write and verify
//! on top of the command sequences in [`crate::protocol`].

mod chunks;
mod context;
mod device;
mod operations;
mod progress;

pub use chunks::{page_chunks, sector_span, BoundaryChunks, Chunk};
pub use context::{AddressMode, FlashContext};
pub use device::SpiNorFlash;
pub use operations::*;
pub use progress::{NoProgress, Operation, Progress};
